impl Menu {
    /// Runs one edit frame. Adjustment is always a 1-D left/right gesture
    /// regardless of menu orientation, with its own repeat timer. Confirm,
    /// back, or a touch tap leaves edit mode without reverting: edits are
    /// applied live, not transactionally.
    pub(crate) fn handle_edit(&mut self, input: &mut InputSnapshot, now_ms: u64) -> EditOutcome {
        let dir = if input.left {
            -1
        } else if input.right {
            1
        } else {
            0
        };

        let mut outcome = EditOutcome::default();
        if self.edit_timer.accept(dir, now_ms, &self.timing) {
            outcome.changed = self.adjust_selected(dir);
        }

        if input.confirm_pressed() {
            input.consume_confirm();
            outcome.exited = true;
        }
        if input.back_pressed() {
            input.consume_back();
            outcome.exited = true;
        }
        if outcome.exited {
            self.end_edit();
            debug!("menu-edit: exit sel={}", self.selection);
        }
        outcome
    }

    /// Applies one edit step to the selected item. A committed change fires
    /// the item's listener synchronously and flags a throttled autosave.
    fn adjust_selected(&mut self, dir: i8) -> bool {
        let Some(item) = self.items.get_mut(self.selection as usize) else {
            return false;
        };

        let changed = item.adjust(dir as i32);
        self.dirty = true;
        if !changed {
            return false;
        }

        let value = item.value();
        if let Some(on_change) = item.on_change() {
            on_change(value);
        }
        if let Some(autosave) = self.autosave.as_mut() {
            autosave.pending = true;
        }
        debug!(
            "menu-edit: adjust sel={} dir={} value={}",
            self.selection, dir, value
        );
        true
    }
}
