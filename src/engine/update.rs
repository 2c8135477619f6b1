impl<G, B, T, S> MenuEngine<G, B, T, S>
where
    G: GamepadSource,
    B: ButtonSource,
    T: TouchSource,
    S: ValueStore,
{
    /// Runs one frame of the engine.
    ///
    /// Refreshes the input snapshot for the current menu's modality (skipped
    /// entirely while the input lock is armed), runs the edit or navigation
    /// state machine, resolves any activation, flushes due autosaves, and
    /// reports whether the display needs a redraw.
    pub fn update(&mut self, now_ms: u64) -> Tick {
        let Some(current_id) = self.current_id() else {
            return Tick::idle();
        };

        let mut activated = None;
        if now_ms >= self.lock_until_ms {
            let Some(menu) = self.menus.get_mut(current_id.index()) else {
                return Tick::idle();
            };
            let modality = menu.modality();
            self.mapper.refresh(modality);

            if menu.editing() {
                let _ = menu.handle_edit(self.mapper.state_mut(), now_ms);
            } else {
                let outcome = menu.handle_nav(self.mapper.state_mut(), now_ms);
                if outcome.back {
                    self.mapper.state_mut().consume_back();
                    if self.stack.len() > 1 {
                        self.pop();
                    }
                    self.lock_until_ms = now_ms + POP_LOCK_MS;
                }
                if let Some(index) = outcome.activated {
                    activated = self.resolve_activation(index, now_ms);
                }
            }
        }

        self.tick_blink(now_ms);
        self.flush_autosaves(now_ms);

        let render = match self.current_mut() {
            Some(menu) => {
                if menu.take_dirty() {
                    TickResult::RenderRequested
                } else {
                    TickResult::NoRender
                }
            }
            None => TickResult::NoRender,
        };

        Tick { render, activated }
    }

    /// Resolves a confirmed selection: submenu links push the stack,
    /// editable items enter edit mode, and plain enabled items are reported
    /// to the caller. Disabled items are inert.
    fn resolve_activation(&mut self, index: u16, now_ms: u64) -> Option<u16> {
        let current_id = self.current_id()?;
        let (enabled, submenu, editable) = {
            let item = self.menus.get(current_id.index())?.item(index)?;
            (item.enabled(), item.submenu_ref(), item.is_editable())
        };

        if !enabled {
            return None;
        }

        if let Some(sub) = submenu {
            if self.push(sub) {
                self.lock_until_ms = now_ms + PUSH_LOCK_MS;
            }
            return None;
        }

        if editable {
            if let Some(menu) = self.menus.get_mut(current_id.index()) {
                menu.begin_edit();
            }
            return None;
        }

        debug!("menu-nav: activate item={}", index);
        Some(index)
    }

    /// Drives the 300ms value blink while a value is being edited. Each
    /// toggle re-dirties the menu so the flash actually repaints.
    fn tick_blink(&mut self, now_ms: u64) {
        let Some(menu) = self.current_mut() else {
            return;
        };
        if !menu.editing() {
            return;
        }
        let on = (now_ms / BLINK_PERIOD_MS) % 2 == 1;
        menu.set_blink(on);
    }

    /// Writes out pending value documents once their throttle window has
    /// elapsed. A failed save is silent and stays pending, so the next
    /// qualifying frame retries with the values still correct in memory.
    fn flush_autosaves(&mut self, now_ms: u64) {
        for slot in 0..self.menus.len() {
            let Some(menu) = self.menus.get(slot) else {
                break;
            };
            let Some(autosave) = menu.autosave else {
                continue;
            };
            if !autosave.due(now_ms) {
                continue;
            }

            let doc = value_doc_of(menu);
            match self.store.save(autosave.path, &doc) {
                Ok(()) => {
                    if let Some(menu) = self.menus.get_mut(slot) {
                        if let Some(autosave) = menu.autosave.as_mut() {
                            autosave.record_saved(now_ms);
                        }
                    }
                    debug!(
                        "menu-store: saved {} entries to {}",
                        doc.len(),
                        autosave.path
                    );
                }
                Err(_) => {
                    debug!("menu-store: save to {} failed, will retry", autosave.path);
                }
            }
        }
    }

    /// Hands the renderer a snapshot of the current menu. Called by the
    /// application after `update` requested a render; does nothing before
    /// a root menu exists.
    pub fn with_frame<F>(&self, f: F)
    where
        F: FnOnce(MenuFrame<'_>),
    {
        let Some(menu) = self.current() else {
            return;
        };

        let mut rows: Vec<ItemView<'_>, MAX_ITEMS> = Vec::new();
        for index in 0..menu.len() {
            let Some(item) = menu.item(index) else {
                break;
            };
            let _ = rows.push(ItemView {
                label: item.text(),
                value: item.value_view(),
                enabled: item.enabled(),
                has_submenu: item.submenu_ref().is_some(),
            });
        }

        f(MenuFrame {
            items: &rows,
            selection: menu.selection(),
            first_visible: menu.first_visible(),
            visible_rows: menu.visible_rows(),
            orientation: menu.orientation(),
            editing: menu.editing(),
            blink_on: menu.blink_on(),
        });
    }
}

/// Serializes every item's scalar value keyed by its positional index.
fn value_doc_of(menu: &Menu) -> ValueDoc {
    let mut doc = ValueDoc::new();
    for index in 0..menu.len() {
        let _ = doc.set(index, menu.item_value(index));
    }
    doc
}
