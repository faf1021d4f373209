use widgetgrid_core::{CellPosition, GridBounds, GridSpec, Point, Rect, Size, Span};
use widgetgrid_designer::grid_calculator::{
    best_position, cells, indices, migrate, offset, span_rect, touched_cell,
};

fn grid_2x4() -> (GridSpec, GridBounds) {
    (
        GridSpec::new(2, 4).unwrap(),
        GridBounds::new(Point::zero(), Size::new(400.0, 200.0)),
    )
}

#[test]
fn test_cells_2x4_are_100px_squares() {
    let (spec, bounds) = grid_2x4();
    let cells = cells(&spec, &bounds);

    assert_eq!(cells.len(), 8);
    for (i, cell) in cells.iter().enumerate() {
        assert_eq!(cell.index, i);
        assert_eq!(cell.rect.width(), 100.0);
        assert_eq!(cell.rect.height(), 100.0);
    }
    assert_eq!(cells[5].rect, Rect::new(100.0, 100.0, 200.0, 200.0));
}

#[test]
fn test_cells_respect_origin() {
    let spec = GridSpec::new(3, 3).unwrap();
    let bounds = GridBounds::new(Point::new(10.0, 20.0), Size::new(90.0, 30.0));
    let cells = cells(&spec, &bounds);

    assert_eq!(cells[0].rect, Rect::new(10.0, 20.0, 40.0, 30.0));
    assert_eq!(cells[8].rect, Rect::new(70.0, 40.0, 100.0, 50.0));
}

#[test]
fn test_cells_last_edge_matches_bounds_for_awkward_sizes() {
    let spec = GridSpec::new(7, 3).unwrap();
    let bounds = GridBounds::new(Point::new(0.1, 0.3), Size::new(100.0, 333.3));
    let cells = cells(&spec, &bounds);
    let rect = bounds.rect();

    let last = cells.last().unwrap();
    assert_eq!(last.rect.right, rect.right);
    assert_eq!(last.rect.bottom, rect.bottom);
    // Neighbours share edges exactly.
    assert_eq!(cells[0].rect.right, cells[1].rect.left);
    assert_eq!(cells[0].rect.bottom, cells[3].rect.top);
}

#[test]
fn test_best_position_single_cell() {
    let (spec, bounds) = grid_2x4();
    let cells = cells(&spec, &bounds);
    let point = Point::new(150.0, 150.0);

    let start = best_position(&point, Span::unit(), &cells, &spec, &bounds).unwrap();
    assert_eq!(start, CellPosition::new(1, 1));
    assert_eq!(indices(start, Span::unit(), &spec), vec![5]);
}

#[test]
fn test_best_position_tie_prefers_touched_cell() {
    let (spec, bounds) = grid_2x4();
    let cells = cells(&spec, &bounds);
    let span = Span::new(2, 1).unwrap();

    // Candidates (0,2) and (0,1) are both 50px from the pointer.
    let start = best_position(&Point::new(250.0, 50.0), span, &cells, &spec, &bounds).unwrap();
    assert_eq!(start, CellPosition::new(0, 2));
    assert_eq!(indices(start, span, &spec), vec![2, 3]);
}

#[test]
fn test_best_position_picks_nearest_centroid() {
    let (spec, bounds) = grid_2x4();
    let cells = cells(&spec, &bounds);
    let span = Span::new(2, 1).unwrap();

    // Left part of cell 2 is closer to the (0,1) candidate centroid at x=200.
    let start = best_position(&Point::new(210.0, 50.0), span, &cells, &spec, &bounds).unwrap();
    assert_eq!(start, CellPosition::new(0, 1));

    // Right part of cell 2 is closer to the (0,2) candidate centroid at x=300.
    let start = best_position(&Point::new(290.0, 50.0), span, &cells, &spec, &bounds).unwrap();
    assert_eq!(start, CellPosition::new(0, 2));
}

#[test]
fn test_best_position_shifts_back_from_edge() {
    let (spec, bounds) = grid_2x4();
    let cells = cells(&spec, &bounds);
    let span = Span::new(2, 2).unwrap();

    // Touching the bottom-right cell forces the span to start at (0,2).
    let start = best_position(&Point::new(390.0, 190.0), span, &cells, &spec, &bounds).unwrap();
    assert_eq!(start, CellPosition::new(0, 2));
}

#[test]
fn test_best_position_outside_grid_is_none() {
    let (spec, bounds) = grid_2x4();
    let cells = cells(&spec, &bounds);

    assert!(best_position(&Point::new(450.0, 50.0), Span::unit(), &cells, &spec, &bounds).is_none());
    assert!(touched_cell(&Point::new(-1.0, 0.0), &cells).is_none());
}

#[test]
fn test_best_position_span_too_large_is_none() {
    let (spec, bounds) = grid_2x4();
    let cells = cells(&spec, &bounds);
    let span = Span::new(5, 1).unwrap();

    assert!(best_position(&Point::new(150.0, 50.0), span, &cells, &spec, &bounds).is_none());
}

#[test]
fn test_best_position_oversized_span_returns_promptly() {
    let (spec, bounds) = grid_2x4();
    let cells = cells(&spec, &bounds);
    let wide = Span::new(1_000_000_000, 1).unwrap();
    let tall = Span::new(1, usize::MAX).unwrap();

    assert!(best_position(&Point::new(350.0, 150.0), wide, &cells, &spec, &bounds).is_none());
    assert!(best_position(&Point::new(350.0, 150.0), tall, &cells, &spec, &bounds).is_none());
}

#[test]
fn test_best_position_full_width_span_in_last_column() {
    let (spec, bounds) = grid_2x4();
    let cells = cells(&spec, &bounds);
    let span = Span::new(4, 1).unwrap();

    assert_eq!(
        best_position(&Point::new(350.0, 150.0), span, &cells, &spec, &bounds),
        Some(CellPosition::new(1, 0))
    );
}

#[test]
fn test_migrate_huge_position_is_empty() {
    let old = GridSpec::new(1, usize::MAX / 2).unwrap();
    let new = GridSpec::new(1, 4).unwrap();

    assert!(migrate(&[usize::MAX / 2 - 1], Span::unit(), &old, &new).is_empty());
}

#[test]
fn test_indices_row_major() {
    let spec = GridSpec::new(3, 4).unwrap();
    let span = Span::new(2, 3).unwrap();
    assert_eq!(
        indices(CellPosition::new(0, 1), span, &spec),
        vec![1, 2, 5, 6, 9, 10]
    );
}

#[test]
fn test_offset_centers_visual_box() {
    let (spec, bounds) = grid_2x4();
    let span = Span::new(2, 1).unwrap();

    let off = offset(
        CellPosition::new(1, 1),
        span,
        Size::new(180.0, 80.0),
        &bounds,
        &spec,
        Point::zero(),
    );
    assert_eq!(off, Point::new(110.0, 110.0));

    let off = offset(
        CellPosition::new(1, 1),
        span,
        Size::new(200.0, 100.0),
        &bounds,
        &spec,
        Point::new(5.0, 7.0),
    );
    assert_eq!(off, Point::new(95.0, 93.0));
}

#[test]
fn test_span_rect() {
    let (spec, bounds) = grid_2x4();
    let rect = span_rect(CellPosition::new(0, 1), Span::new(3, 2).unwrap(), &spec, &bounds);
    assert_eq!(rect, Rect::new(100.0, 0.0, 400.0, 200.0));
}

#[test]
fn test_migrate_scales_rows() {
    let old = GridSpec::new(2, 4).unwrap();
    let new = GridSpec::new(4, 4).unwrap();

    assert_eq!(migrate(&[1], Span::unit(), &old, &new), vec![1]);
    // (1,3) -> (2,3)
    assert_eq!(migrate(&[7], Span::unit(), &old, &new), vec![11]);
}

#[test]
fn test_migrate_uses_first_index_regardless_of_order() {
    let old = GridSpec::new(2, 4).unwrap();
    let new = GridSpec::new(4, 8).unwrap();
    let span = Span::new(2, 1).unwrap();

    // (0,2) -> (0,4)
    assert_eq!(migrate(&[3, 2], span, &old, &new), vec![4, 5]);
}

#[test]
fn test_migrate_unfittable_is_empty() {
    let old = GridSpec::new(4, 8).unwrap();
    let new = GridSpec::new(2, 4).unwrap();
    let span = Span::new(4, 1).unwrap();

    // (0,4) -> (0,2), a 4-wide span cannot start there.
    assert!(migrate(&[4, 5, 6, 7], span, &old, &new).is_empty());
}
