use core::sync::atomic::{AtomicI32, Ordering};

use super::*;
use crate::item::MenuItem;

fn released() -> InputSnapshot {
    InputSnapshot::default()
}

fn held_down() -> InputSnapshot {
    InputSnapshot {
        down: true,
        ..InputSnapshot::default()
    }
}

fn held_left() -> InputSnapshot {
    InputSnapshot {
        left: true,
        ..InputSnapshot::default()
    }
}

fn vertical_menu(item_count: usize) -> Menu {
    let mut menu = Menu::new(Modality::Gamepad, Orientation::Vertical);
    for _ in 0..item_count {
        assert!(menu.add_item(MenuItem::label("Item")));
    }
    menu
}

#[test]
fn capacity_overflow_is_rejected() {
    let mut menu = vertical_menu(MAX_ITEMS);
    assert!(!menu.add_item(MenuItem::label("Extra")));
    assert_eq!(menu.len(), MAX_ITEMS as u16);
}

#[test]
fn selection_clamps_and_never_wraps() {
    let mut menu = vertical_menu(3);

    let mut up = InputSnapshot {
        up: true,
        ..InputSnapshot::default()
    };
    menu.handle_nav(&mut up, 0);
    assert_eq!(menu.selection(), 0);

    let mut input = held_down();
    for step in 0..20u64 {
        menu.handle_nav(&mut input, step * 500);
        assert!(menu.selection() <= 2);
    }
    assert_eq!(menu.selection(), 2);
}

#[test]
fn fresh_press_moves_immediately_then_repeats_with_acceleration() {
    let mut menu = vertical_menu(10);
    let mut input = held_down();

    menu.handle_nav(&mut input, 0);
    assert_eq!(menu.selection(), 1, "first move is immediate");

    menu.handle_nav(&mut input, 399);
    assert_eq!(menu.selection(), 1, "no repeat before initial delay");

    menu.handle_nav(&mut input, 400);
    assert_eq!(menu.selection(), 2, "repeat starts after initial delay");

    menu.handle_nav(&mut input, 500);
    assert_eq!(menu.selection(), 2, "hold cadence not yet elapsed");

    menu.handle_nav(&mut input, 620);
    assert_eq!(menu.selection(), 3, "hold cadence is 220ms");

    menu.handle_nav(&mut input, 840);
    assert_eq!(menu.selection(), 4);

    // Held past 800ms, cadence drops to the fast delay.
    menu.handle_nav(&mut input, 959);
    assert_eq!(menu.selection(), 4);
    menu.handle_nav(&mut input, 960);
    assert_eq!(menu.selection(), 5);
}

#[test]
fn release_rearms_the_immediate_move() {
    let mut menu = vertical_menu(5);

    menu.handle_nav(&mut held_down(), 0);
    assert_eq!(menu.selection(), 1);

    menu.handle_nav(&mut released(), 50);
    menu.handle_nav(&mut held_down(), 60);
    assert_eq!(menu.selection(), 2, "fresh press after release moves at once");
}

#[test]
fn direction_change_moves_immediately() {
    let mut menu = vertical_menu(5);
    menu.focus(2);

    menu.handle_nav(&mut held_down(), 0);
    assert_eq!(menu.selection(), 3);

    let mut up = InputSnapshot {
        up: true,
        ..InputSnapshot::default()
    };
    menu.handle_nav(&mut up, 10);
    assert_eq!(menu.selection(), 2, "reversing direction needs no delay");
}

#[test]
fn horizontal_menu_ignores_the_vertical_axis() {
    let mut menu = Menu::new(Modality::Gamepad, Orientation::Horizontal);
    for _ in 0..3 {
        menu.add_item(MenuItem::label("Tile"));
    }

    menu.handle_nav(&mut held_down(), 0);
    assert_eq!(menu.selection(), 0);

    let mut right = InputSnapshot {
        right: true,
        ..InputSnapshot::default()
    };
    menu.handle_nav(&mut right, 10);
    assert_eq!(menu.selection(), 1);
}

#[test]
fn disabled_items_are_skipped_but_kept() {
    let mut menu = vertical_menu(4);
    menu.set_item_enabled(1, false);

    menu.handle_nav(&mut held_down(), 0);
    assert_eq!(menu.selection(), 2, "cursor jumps over the disabled row");
    assert_eq!(menu.len(), 4);
}

#[test]
fn cursor_stays_put_when_only_disabled_items_remain_ahead() {
    let mut menu = vertical_menu(3);
    menu.set_item_enabled(1, false);
    menu.set_item_enabled(2, false);

    menu.handle_nav(&mut held_down(), 0);
    assert_eq!(menu.selection(), 0);
}

#[test]
fn visible_window_shifts_only_at_the_edges() {
    let mut menu = vertical_menu(10);
    assert_eq!(menu.first_visible(), 0);

    for _ in 0..5 {
        menu.move_selection(1);
    }
    assert_eq!(menu.selection(), 5);
    assert_eq!(menu.first_visible(), 0, "cursor still inside the window");

    menu.move_selection(1);
    assert_eq!(menu.selection(), 6);
    assert_eq!(menu.first_visible(), 1, "window follows the cursor down");

    for _ in 0..3 {
        menu.move_selection(1);
    }
    assert_eq!(menu.first_visible(), 4);

    for _ in 0..5 {
        menu.move_selection(-1);
    }
    assert_eq!(menu.selection(), 4);
    assert_eq!(menu.first_visible(), 4, "window stays until the cursor exits");

    menu.move_selection(-1);
    assert_eq!(menu.first_visible(), 3);
}

#[test]
fn confirm_edge_is_consumed_after_activation() {
    let mut menu = vertical_menu(2);
    let mut input = InputSnapshot {
        confirm: true,
        ..InputSnapshot::default()
    };

    let outcome = menu.handle_nav(&mut input, 0);
    assert_eq!(outcome.activated, Some(0));
    assert!(!input.confirm_pressed(), "edge may not fire twice in a frame");
}

#[test]
fn selection_moves_do_not_fire_while_editing_elsewhere() {
    // Editing uses left/right regardless of orientation; a vertical menu in
    // edit mode must not move its cursor on left/right input.
    let mut menu = Menu::new(Modality::Gamepad, Orientation::Vertical);
    menu.add_item(MenuItem::range("Volume", 5, 0, 10, 1));
    menu.begin_edit();

    menu.handle_edit(&mut held_left(), 0);
    assert_eq!(menu.selection(), 0);
    assert_eq!(menu.item_value(0), 4);
}

#[test]
fn range_hold_clamps_at_min_and_stays() {
    let mut menu = Menu::new(Modality::Gamepad, Orientation::Vertical);
    menu.add_item(MenuItem::range("Volume", 5, 0, 10, 1));
    menu.begin_edit();

    for _ in 0..9 {
        menu.adjust_selected(-1);
    }
    assert_eq!(menu.item_value(0), 0);

    menu.adjust_selected(-1);
    assert_eq!(menu.item_value(0), 0, "further decrements are no-ops");
}

#[test]
fn choice_cycles_back_to_start_after_full_lap() {
    let mut menu = Menu::new(Modality::Gamepad, Orientation::Vertical);
    menu.add_item(MenuItem::choice("Fan", &["Off", "Low", "High"], 0));
    menu.begin_edit();

    for _ in 0..3 {
        assert!(menu.adjust_selected(1));
    }
    assert_eq!(menu.item_value(0), 0, "N steps return to the start");
}

#[test]
fn edit_repeat_uses_its_own_timer() {
    let mut menu = Menu::new(Modality::Gamepad, Orientation::Vertical);
    menu.add_item(MenuItem::range("Volume", 5, 0, 10, 1));
    menu.begin_edit();

    let mut input = held_left();
    menu.handle_edit(&mut input, 0);
    assert_eq!(menu.item_value(0), 4, "first adjustment is immediate");

    menu.handle_edit(&mut input, 399);
    assert_eq!(menu.item_value(0), 4);

    menu.handle_edit(&mut input, 400);
    assert_eq!(menu.item_value(0), 3);
}

static LAST_CHANGE: AtomicI32 = AtomicI32::new(i32::MIN);

fn remember_change(value: i32) {
    LAST_CHANGE.store(value, Ordering::SeqCst);
}

#[test]
fn on_change_fires_only_when_the_value_moves() {
    let mut menu = Menu::new(Modality::Gamepad, Orientation::Vertical);
    menu.add_item(MenuItem::range("Volume", 9, 0, 10, 1).with_on_change(remember_change));
    menu.begin_edit();

    LAST_CHANGE.store(i32::MIN, Ordering::SeqCst);
    menu.adjust_selected(1);
    assert_eq!(LAST_CHANGE.load(Ordering::SeqCst), 10);

    LAST_CHANGE.store(i32::MIN, Ordering::SeqCst);
    menu.adjust_selected(1);
    assert_eq!(
        LAST_CHANGE.load(Ordering::SeqCst),
        i32::MIN,
        "clamped no-op must not notify"
    );
}

#[test]
fn confirm_exits_edit_mode_and_keeps_the_value() {
    let mut menu = Menu::new(Modality::Gamepad, Orientation::Vertical);
    menu.add_item(MenuItem::range("Volume", 5, 0, 10, 1));
    menu.begin_edit();

    menu.handle_edit(&mut held_left(), 0);
    assert_eq!(menu.item_value(0), 4);

    let mut confirm = InputSnapshot {
        confirm: true,
        ..InputSnapshot::default()
    };
    let outcome = menu.handle_edit(&mut confirm, 100);
    assert!(outcome.exited);
    assert!(!menu.editing());
    assert_eq!(menu.item_value(0), 4, "exit does not revert the edit");
}

#[test]
fn back_exit_consumes_the_edge() {
    let mut menu = Menu::new(Modality::Gamepad, Orientation::Vertical);
    menu.add_item(MenuItem::range("Volume", 5, 0, 10, 1));
    menu.begin_edit();

    let mut back = InputSnapshot {
        back: true,
        ..InputSnapshot::default()
    };
    let outcome = menu.handle_edit(&mut back, 0);
    assert!(outcome.exited);
    assert!(
        !back.back_pressed(),
        "the same press must not also pop a menu"
    );
}

#[test]
fn out_of_range_accessors_return_benign_defaults() {
    let mut menu = vertical_menu(1);
    assert_eq!(menu.item_value(9), 0);
    menu.set_item_value(9, 3);
    menu.set_item_enabled(9, false);
    assert!(menu.item(9).is_none());
}
