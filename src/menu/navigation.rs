impl Menu {
    /// Runs one navigation frame: repeat-aware selection movement plus
    /// confirm/back edge handling. The confirm edge is consumed here; the
    /// back edge is only reported, because popping is the engine's call.
    pub(crate) fn handle_nav(&mut self, input: &mut InputSnapshot, now_ms: u64) -> NavOutcome {
        let dir = self.nav_direction(input);
        if self.nav_timer.accept(dir, now_ms, &self.timing) {
            self.move_selection(dir);
        }

        let mut outcome = NavOutcome::default();
        if input.confirm_pressed() {
            input.consume_confirm();
            outcome.activated = Some(self.selection);
        }
        if input.back_pressed() {
            outcome.back = true;
        }
        outcome
    }

    /// Signed navigation direction for this menu's orientation. Touch menus
    /// have no directional repeat and always report 0.
    fn nav_direction(&self, input: &InputSnapshot) -> i8 {
        match self.orientation {
            Orientation::Vertical => {
                if input.up {
                    -1
                } else if input.down {
                    1
                } else {
                    0
                }
            }
            Orientation::Horizontal => {
                if input.left {
                    -1
                } else if input.right {
                    1
                } else {
                    0
                }
            }
        }
    }

    /// Moves the cursor one step in `dir`, skipping disabled items. Clamps
    /// at the ends; plain navigation never wraps.
    fn move_selection(&mut self, dir: i8) {
        if dir == 0 || self.items.is_empty() {
            return;
        }

        let count = self.items.len() as i32;
        let mut next = self.selection as i32;
        loop {
            next += dir as i32;
            if next < 0 || next >= count {
                return;
            }
            if self.items[next as usize].enabled() {
                break;
            }
        }

        if next as u16 != self.selection {
            self.selection = next as u16;
            self.ensure_visible();
            self.dirty = true;
            debug!("menu-nav: select {}/{}", self.selection, count);
        }
    }

    /// Shifts the visible window only when the cursor leaves it.
    fn ensure_visible(&mut self) {
        if self.orientation != Orientation::Vertical {
            return;
        }
        if self.selection < self.first_visible {
            self.first_visible = self.selection;
        } else if self.selection >= self.first_visible + self.visible_rows {
            self.first_visible = self.selection + 1 - self.visible_rows;
        }
    }
}
