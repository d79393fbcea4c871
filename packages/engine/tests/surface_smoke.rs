use pixelgrid_engine::{no_cell, PixelSurface};

/// 1000×1000 window at dpr 1: every cell is 10×10 CSS px
fn surface() -> PixelSurface {
    let mut surface = PixelSurface::new();
    surface.resize(1000.0, 1000.0, 1.0);
    surface
}

fn center(col: u32, row: u32) -> (f64, f64) {
    (col as f64 * 10.0 + 5.0, row as f64 * 10.0 + 5.0)
}

fn click(surface: &mut PixelSurface, col: u32, row: u32) -> bool {
    let (x, y) = center(col, row);
    surface.pointer_down(x, y, 0);
    surface.pointer_up(x, y)
}

#[test]
fn surface_smoke_click_toggles_cell() {
    let mut surface = surface();
    assert_eq!(surface.cell_count(), 10_000);
    assert_eq!(surface.cell_index_at(55.0, 55.0), 505);

    assert!(click(&mut surface, 5, 5));
    assert_eq!(surface.cell_color(505).as_deref(), Some("#ff2df1"));
    assert_eq!(surface.painted_count(), 1);

    assert!(click(&mut surface, 5, 5));
    assert!(surface.is_blank(505));
    assert_eq!(surface.painted_count(), 0);
}

#[test]
fn surface_smoke_drag_paints_path_without_toggle() {
    let mut surface = surface();
    let (x, y) = center(0, 0);
    surface.pointer_down(x, y, 0);
    for col in 1..=3 {
        let (x, y) = center(col, 0);
        surface.pointer_move(x, y);
    }
    let (x, y) = center(3, 0);
    assert!(!surface.pointer_up(x, y));

    for idx in 0..=3 {
        assert_eq!(surface.cell_color(idx).as_deref(), Some("#ff2df1"), "cell {idx}");
    }
    assert_eq!(surface.painted_count(), 4);
    assert!(!surface.is_drawing());
}

#[test]
fn surface_smoke_menu_changes_active_color() {
    let mut surface = surface();
    let (x, y) = center(2, 7);
    surface.open_context_menu(x, y);
    assert!(surface.is_menu_open());
    assert_eq!(surface.menu_target(), 702);
    assert_eq!(surface.menu_x(), Some(x));

    assert_eq!(surface.palette_len(), 5);
    assert_eq!(surface.palette_color(2).as_deref(), Some("#33ff57"));
    assert!(surface.choose_palette(2));
    assert!(!surface.is_menu_open());
    assert_eq!(surface.cell_color(702).as_deref(), Some("#33ff57"));
    assert_eq!(surface.active_color(), "#33ff57");

    // Later clicks use the picked color
    assert!(click(&mut surface, 0, 0));
    assert_eq!(surface.cell_color(0).as_deref(), Some("#33ff57"));
}

#[test]
fn surface_smoke_out_of_range_indices_are_no_cell() {
    let mut surface = surface();
    assert_eq!(surface.cell_index_at(-1.0, 5.0), no_cell());
    assert_eq!(surface.cell_index_at(1000.0, 5.0), no_cell());
    assert_eq!(surface.cell_color(no_cell()), None);
    assert_eq!(surface.cell_color(10_000), None);
    assert!(!surface.paint(no_cell(), "#000000", false).unwrap());
    assert_eq!(surface.painted_count(), 0);
}

#[test]
fn surface_smoke_colors_view_matches_grid() {
    let mut surface = surface();
    assert!(surface.paint(1, "#3357ff", false).unwrap());
    assert!(surface.take_needs_redraw());
    assert!(!surface.take_needs_redraw());

    assert_eq!(surface.colors_len(), 10_000);
    assert_eq!(surface.colors_len_bytes(), 40_000);
    let colors = unsafe { std::slice::from_raw_parts(surface.colors_ptr(), surface.colors_len()) };
    // ABGR: 0xAABBGGRR
    assert_eq!(colors[0], 0xFFFF_FFFF);
    assert_eq!(colors[1], 0xFFFF_5733);
}

#[test]
fn surface_smoke_high_dpi_keeps_css_mapping() {
    let mut surface = PixelSurface::new();
    surface.resize(500.0, 400.0, 2.0);
    assert_eq!(surface.canvas_width(), 1000.0);
    assert_eq!(surface.canvas_height(), 800.0);
    assert_eq!(surface.cell_width(), 10.0);
    assert_eq!(surface.cell_height(), 8.0);

    // 5 CSS px per column, 4 CSS px per row
    assert_eq!(surface.cell_index_at(12.0, 9.0), 2 * 100 + 2);
}
