use super::*;
use crate::domain::color::{BLANK, BLUE, GREEN, MAGENTA, PRESET_PALETTE, YELLOW};

/// 100×100 grid on a 1000×1000 CSS-px canvas: every cell is 10×10
fn surface() -> SurfaceCore {
    let mut core = SurfaceCore::default();
    core.resize(Viewport::new(1000.0, 1000.0, 1.0));
    core.take_needs_redraw();
    core
}

fn center(col: u32, row: u32) -> Point {
    Point::new(col as f64 * 10.0 + 5.0, row as f64 * 10.0 + 5.0)
}

fn click(core: &mut SurfaceCore, p: Point) {
    core.pointer_down(p, PointerButton::Primary);
    core.pointer_up(p);
}

#[test]
fn starts_blank_idle_with_magenta_active() {
    let core = SurfaceCore::default();
    assert!((0..10_000).all(|i| core.cell_color(i) == Some(BLANK)));
    assert_eq!(core.active_color(), MAGENTA);
    assert_eq!(core.interaction(), &Interaction::Idle);
    assert!(core.needs_redraw());
}

#[test]
fn nothing_maps_before_the_first_resize() {
    let mut core = SurfaceCore::default();
    assert_eq!(core.cell_index_at(Point::new(5.0, 5.0)), None);
    click(&mut core, Point::new(5.0, 5.0));
    assert_eq!(core.grid().count_painted(), 0);
}

#[test]
fn click_toggles_a_cell_on_and_off() {
    let mut core = surface();

    click(&mut core, center(5, 5));
    assert_eq!(core.cell_color(505), Some(MAGENTA));
    assert!(core.take_needs_redraw());

    click(&mut core, center(5, 5));
    assert_eq!(core.cell_color(505), Some(BLANK));
    assert!(core.take_needs_redraw());
    assert!(!core.is_drawing());
}

#[test]
fn click_on_a_cell_of_another_color_clears_it() {
    let mut core = surface();
    core.paint(Some(505), BLUE, false);

    click(&mut core, center(5, 5));
    assert_eq!(core.cell_color(505), Some(BLANK));
}

#[test]
fn small_jitter_still_counts_as_a_click() {
    let mut core = surface();
    let start = center(5, 5);
    let jitter = Point::new(start.x + 3.0, start.y + 2.0);

    core.pointer_down(start, PointerButton::Primary);
    core.pointer_move(jitter);
    assert_eq!(core.cell_color(505), Some(MAGENTA), "move paints while pressed");
    core.pointer_up(jitter);
    // Pressed cell was blank -> force set, not toggled back off
    assert_eq!(core.cell_color(505), Some(MAGENTA));
}

#[test]
fn drag_paints_every_visited_cell_and_release_does_not_toggle() {
    let mut core = surface();
    core.paint(Some(2), BLUE, false);

    core.pointer_down(center(0, 0), PointerButton::Primary);
    for col in 0..=3 {
        core.pointer_move(center(col, 0));
    }
    match core.interaction() {
        Interaction::Drawing(session) => assert!(session.has_moved),
        other => panic!("expected drawing, got {other:?}"),
    }
    core.pointer_up(center(3, 0));

    for idx in 0..=3 {
        assert_eq!(core.cell_color(idx), Some(MAGENTA), "cell {idx}");
    }
    assert_eq!(core.cell_color(4), Some(BLANK));
    assert!(!core.is_drawing());
}

#[test]
fn drag_back_to_the_origin_counts_as_a_click() {
    let mut core = surface();
    core.pointer_down(center(1, 1), PointerButton::Primary);
    core.pointer_move(center(4, 1));
    core.pointer_up(center(1, 1));

    // Release toggles against the press snapshot (blank) -> set
    assert_eq!(core.cell_color(101), Some(MAGENTA));
    assert_eq!(core.cell_color(104), Some(MAGENTA));
}

#[test]
fn release_exactly_at_the_threshold_is_not_a_click() {
    let mut core = surface();
    let start = center(5, 5);
    core.pointer_down(start, PointerButton::Primary);
    assert!(!core.pointer_up(Point::new(start.x + 5.0, start.y)));
    assert_eq!(core.cell_color(505), Some(BLANK));
}

#[test]
fn moves_without_a_press_paint_nothing() {
    let mut core = surface();
    assert!(!core.pointer_move(center(2, 2)));
    assert!(!core.pointer_up(center(2, 2)));
    assert_eq!(core.grid().count_painted(), 0);
    assert!(!core.needs_redraw());
}

#[test]
fn secondary_button_does_not_start_a_gesture() {
    let mut core = surface();
    core.pointer_down(center(2, 2), PointerButton::Secondary);
    assert!(!core.is_drawing());
    core.pointer_up(center(2, 2));
    assert_eq!(core.cell_color(202), Some(BLANK));
}

#[test]
fn auxiliary_button_draws_like_primary() {
    let mut core = surface();
    core.pointer_down(center(2, 2), PointerButton::Auxiliary);
    assert!(core.is_drawing());
    core.pointer_up(center(2, 2));
    assert_eq!(core.cell_color(202), Some(MAGENTA));
}

#[test]
fn window_release_ends_the_gesture_without_painting() {
    let mut core = surface();
    core.pointer_down(center(7, 7), PointerButton::Primary);
    core.release_pointer();
    assert!(!core.is_drawing());

    // A late canvas pointer-up is ignored
    assert!(!core.pointer_up(center(7, 7)));
    assert_eq!(core.cell_color(707), Some(BLANK));
}

#[test]
fn dragging_off_the_grid_paints_nothing_there() {
    let mut core = surface();
    core.pointer_down(center(99, 0), PointerButton::Primary);
    assert!(!core.pointer_move(Point::new(1200.0, 5.0)));
    core.pointer_up(Point::new(1200.0, 5.0));
    assert_eq!(core.grid().count_painted(), 0);
}

#[test]
fn press_off_grid_then_click_on_a_cell_toggles_it() {
    let mut core = surface();
    core.set_canvas_offset(10.0, 10.0);
    // Pressed 2px left of the canvas (no cell), released 2px inside (cell 0)
    core.pointer_down(Point::new(8.0, 15.0), PointerButton::Primary);
    core.pointer_up(Point::new(12.0, 15.0));
    // No press snapshot -> toggle semantics against the current (blank) color
    assert_eq!(core.cell_color(0), Some(MAGENTA));
}

#[test]
fn canvas_offset_shifts_the_mapping() {
    let mut core = surface();
    core.set_canvas_offset(100.0, 50.0);
    assert_eq!(core.cell_index_at(Point::new(105.0, 55.0)), Some(0));
    assert_eq!(core.cell_index_at(Point::new(95.0, 55.0)), None);
}

#[test]
fn context_menu_pick_paints_target_and_sets_active_color() {
    let mut core = surface();
    core.open_context_menu(center(3, 4));
    let menu = *core.menu().expect("menu open");
    assert_eq!(menu.target, Some(403));
    assert_eq!(menu.position, center(3, 4));

    assert!(core.choose_palette(2));
    assert_eq!(core.cell_color(403), Some(GREEN));
    assert_eq!(core.active_color(), GREEN);
    assert!(!core.is_menu_open());

    // Later clicks use the picked color
    click(&mut core, center(0, 0));
    assert_eq!(core.cell_color(0), Some(GREEN));
}

#[test]
fn context_menu_pick_overwrites_painted_cells() {
    let mut core = surface();
    core.paint(Some(10), BLUE, false);
    core.open_context_menu(center(10, 0));
    assert!(core.choose_color(YELLOW));
    assert_eq!(core.cell_color(10), Some(YELLOW));
}

#[test]
fn context_menu_off_grid_only_changes_the_active_color() {
    let mut core = surface();
    core.open_context_menu(Point::new(-5.0, -5.0));
    assert_eq!(core.menu().and_then(|m| m.target), None);
    assert!(core.choose_palette(4));
    assert_eq!(core.active_color(), PRESET_PALETTE[4]);
    assert_eq!(core.grid().count_painted(), 0);
}

#[test]
fn dismiss_closes_without_side_effects() {
    let mut core = surface();
    core.open_context_menu(center(1, 1));
    core.dismiss_menu();
    assert!(!core.is_menu_open());
    assert_eq!(core.active_color(), MAGENTA);
    assert_eq!(core.cell_color(101), Some(BLANK));
}

#[test]
fn picks_without_an_open_menu_are_rejected() {
    let mut core = surface();
    assert!(!core.choose_palette(0));
    assert!(!core.choose_color(BLUE));
    assert_eq!(core.active_color(), MAGENTA);

    core.open_context_menu(center(1, 1));
    assert!(!core.choose_palette(5), "palette index out of range");
    assert!(core.is_menu_open());
}

#[test]
fn context_menu_interrupts_a_drag() {
    let mut core = surface();
    core.pointer_down(center(0, 0), PointerButton::Primary);
    core.open_context_menu(center(0, 0));
    assert!(core.is_menu_open());
    assert!(!core.is_drawing());
    assert!(!core.pointer_move(center(1, 0)));
}

#[test]
fn pressing_the_canvas_closes_the_menu_and_starts_drawing() {
    let mut core = surface();
    core.open_context_menu(center(1, 1));
    core.pointer_down(center(2, 2), PointerButton::Primary);
    assert!(core.is_drawing());
    assert!(core.menu().is_none());
    core.pointer_up(center(2, 2));
    assert_eq!(core.cell_color(202), Some(MAGENTA));
    assert_eq!(core.cell_color(101), Some(BLANK));
}

#[test]
fn repainting_the_same_color_does_not_request_a_redraw() {
    let mut core = surface();
    assert!(core.paint(Some(1), BLUE, false));
    assert!(core.take_needs_redraw());
    assert!(!core.paint(Some(1), BLUE, false));
    assert!(!core.paint(None, BLUE, false));
    assert!(!core.needs_redraw());
}

#[test]
fn resize_requests_a_redraw_and_keeps_cells() {
    let mut core = surface();
    core.paint(Some(42), BLUE, false);
    core.take_needs_redraw();

    core.resize(Viewport::new(500.0, 250.0, 2.0));
    assert!(core.take_needs_redraw());
    assert_eq!(core.metrics().backing_width(), 1000.0);
    assert_eq!(core.metrics().cell_height(), 5.0);
    assert_eq!(core.cell_color(42), Some(BLUE));
}

#[test]
fn load_config_resets_the_surface_but_keeps_the_viewport() {
    let mut core = surface();
    core.paint(Some(42), BLUE, false);
    core.open_context_menu(center(1, 1));

    let config = SurfaceConfig::from_json(r#"{"gridSize": 10, "rowDivisor": 5}"#).unwrap();
    core.load_config(config);

    assert_eq!(core.grid().cell_count(), 100);
    assert_eq!(core.grid().count_painted(), 0);
    assert_eq!(core.interaction(), &Interaction::Idle);
    assert_eq!(core.metrics().cell_width(), 100.0);
    assert_eq!(core.metrics().cell_height(), 200.0);
    assert!(core.needs_redraw());
}

#[test]
fn draw_list_covers_every_cell_in_row_major_order() {
    let mut core = surface();
    core.paint(Some(505), BLUE, false);
    let list = core.draw_list();

    assert_eq!(list.cells.len(), 10_000);
    assert_eq!((list.backing_width, list.backing_height), (1000.0, 1000.0));
    assert_eq!(list.border_width, 2.0);
    assert_eq!(list.border_color.to_hex(), "#cccccc");

    let cell = list.cells[505];
    assert_eq!(cell.color, BLUE);
    assert_eq!((cell.rect.x, cell.rect.y), (50.0, 50.0));
    assert!(list.cells[506].rect.x > cell.rect.x);
}

#[test]
fn record_render_updates_stats() {
    let mut core = surface();
    core.record_render(10_000, 1.5);
    core.record_render(10_000, 0.5);
    let stats = core.render_stats();
    assert_eq!(stats.frames(), 2);
    assert_eq!(stats.cells_drawn(), 10_000);
    assert_eq!(stats.last_render_ms(), 0.5);
}
