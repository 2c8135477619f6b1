impl<G, B, T, S> MenuEngine<G, B, T, S>
where
    G: GamepadSource,
    B: ButtonSource,
    T: TouchSource,
    S: ValueStore,
{
    /// Registers a menu in the table and returns its handle, or `None` when
    /// the table is full.
    pub fn add_menu(&mut self, menu: Menu) -> Option<MenuId> {
        let id = MenuId(self.menus.len() as u8);
        if self.menus.push(menu).is_err() {
            debug!("menu-stack: table full, capacity {}", MAX_MENUS);
            return None;
        }
        Some(id)
    }

    pub fn menu(&self, id: MenuId) -> Option<&Menu> {
        self.menus.get(id.index())
    }

    pub fn menu_mut(&mut self, id: MenuId) -> Option<&mut Menu> {
        self.menus.get_mut(id.index())
    }

    /// Resets the stack to a single element. The root can be replaced but
    /// never removed afterwards.
    pub fn set_root(&mut self, id: MenuId) -> bool {
        if id.index() >= self.menus.len() {
            return false;
        }
        self.stack.clear();
        let _ = self.stack.push(id);
        if let Some(menu) = self.menus.get_mut(id.index()) {
            menu.mark_dirty();
        }
        debug!("menu-stack: root set to {:?}", id);
        true
    }

    /// Enters a submenu and forces it to redraw. Fails on an unknown id or
    /// when the stack is at maximum depth.
    pub fn push(&mut self, id: MenuId) -> bool {
        if id.index() >= self.menus.len() || self.stack.push(id).is_err() {
            return false;
        }
        if let Some(menu) = self.menus.get_mut(id.index()) {
            menu.mark_dirty();
        }
        debug!("menu-stack: push {:?} depth={}", id, self.stack.len());
        true
    }

    /// Returns to the parent menu and forces it to redraw. A single-element
    /// stack is left untouched and `None` is returned: the root cannot be
    /// popped.
    pub fn pop(&mut self) -> Option<MenuId> {
        if self.stack.len() <= 1 {
            return None;
        }
        self.stack.pop();
        let revealed = *self.stack.last()?;
        if let Some(menu) = self.menus.get_mut(revealed.index()) {
            menu.mark_dirty();
        }
        debug!("menu-stack: pop -> {:?} depth={}", revealed, self.stack.len());
        Some(revealed)
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn current_id(&self) -> Option<MenuId> {
        self.stack.last().copied()
    }

    pub fn current(&self) -> Option<&Menu> {
        self.menus.get(self.current_id()?.index())
    }

    pub fn current_mut(&mut self) -> Option<&mut Menu> {
        let id = self.current_id()?;
        self.menus.get_mut(id.index())
    }

    /// Binds a menu to a document path and restores previously saved values.
    ///
    /// A loadable document overwrites every item index it names and marks
    /// the menu dirty; absence or a load error keeps construction defaults
    /// and is not treated as a failure (first run has no document yet).
    /// Returns whether a document was restored.
    pub fn enable_autosave(&mut self, id: MenuId, path: &'static str) -> bool {
        let loaded = match self.store.load(path) {
            Ok(doc) => doc,
            Err(_) => {
                debug!("menu-store: load from {} failed, keeping defaults", path);
                None
            }
        };

        let Some(menu) = self.menus.get_mut(id.index()) else {
            return false;
        };
        menu.autosave = Some(AutoSave::new(path));

        match loaded {
            Some(doc) => {
                for (index, value) in doc.iter() {
                    menu.set_item_value(index, value);
                }
                menu.mark_dirty();
                debug!("menu-store: restored {} entries from {}", doc.len(), path);
                true
            }
            None => {
                debug!("menu-store: no document at {}, keeping defaults", path);
                false
            }
        }
    }

    /// Stops autosaving for a menu. Values stay as they are in memory.
    pub fn disable_autosave(&mut self, id: MenuId) {
        if let Some(menu) = self.menus.get_mut(id.index()) {
            menu.autosave = None;
        }
    }
}
