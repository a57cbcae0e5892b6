use ratatui::layout::Rect;

pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let header_height = area.height.min(3);
    let footer_height = 3.min(area.height.saturating_sub(header_height));
    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: area.height.saturating_sub(header_height + footer_height),
    };
    (header, body, footer)
}

pub fn body_rect(area: Rect) -> Rect {
    layout_regions(area).1
}

/// Horizontally centered column at most `max_width` wide.
pub fn centered_column(area: Rect, max_width: u16) -> Rect {
    let width = area.width.min(max_width);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y,
        width,
        height: area.height,
    }
}

/// Move `area` down by `rows` (up if negative) and clip it to `bounds`.
///
/// Returns `None` when nothing is left inside `bounds`.
pub fn shift_rect(area: Rect, rows: i32, bounds: Rect) -> Option<Rect> {
    let top = i32::from(area.y).saturating_add(rows);
    let bottom = top.saturating_add(i32::from(area.height));
    let clipped_top = top.max(i32::from(bounds.y));
    let clipped_bottom = bottom.min(i32::from(bounds.y) + i32::from(bounds.height));
    if clipped_bottom <= clipped_top || area.width == 0 {
        return None;
    }
    Some(Rect {
        x: area.x,
        y: clipped_top as u16,
        width: area.width,
        height: (clipped_bottom - clipped_top) as u16,
    })
}

/// Split `area` into consecutive rows of the given heights. Rows past the
/// bottom come back with zero height.
pub fn stack(area: Rect, heights: &[u16], gap: u16) -> Vec<Rect> {
    let mut y = area.y;
    let bottom = area.y.saturating_add(area.height);
    heights
        .iter()
        .map(|&height| {
            let top = y.min(bottom);
            let rect = Rect {
                x: area.x,
                y: top,
                width: area.width,
                height: height.min(bottom - top),
            };
            y = y.saturating_add(height).saturating_add(gap);
            rect
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regions_cover_area() {
        let (header, body, footer) = layout_regions(Rect::new(0, 0, 80, 24));
        assert_eq!(header.height, 3);
        assert_eq!(footer.y, 21);
        assert_eq!(body, Rect::new(0, 3, 80, 18));
    }

    #[test]
    fn shift_moves_and_clips() {
        let bounds = Rect::new(0, 3, 80, 10);
        assert_eq!(
            shift_rect(Rect::new(2, 5, 10, 3), 2, bounds),
            Some(Rect::new(2, 7, 10, 3))
        );
        assert_eq!(
            shift_rect(Rect::new(2, 11, 10, 3), 1, bounds),
            Some(Rect::new(2, 12, 10, 1))
        );
        assert_eq!(
            shift_rect(Rect::new(2, 3, 10, 2), -1, bounds),
            Some(Rect::new(2, 3, 10, 1))
        );
        assert_eq!(shift_rect(Rect::new(2, 12, 10, 1), 3, bounds), None);
    }

    #[test]
    fn extreme_shifts_clip_away() {
        let bounds = Rect::new(0, 3, 80, 10);
        let area = Rect::new(2, 5, 10, u16::MAX);
        assert_eq!(shift_rect(area, i32::MAX, bounds), None);
        assert_eq!(shift_rect(Rect::new(2, 5, 10, 3), i32::MIN, bounds), None);
    }

    #[test]
    fn stack_clamps_to_bottom() {
        let rows = stack(Rect::new(0, 0, 10, 6), &[2, 2, 4], 1);
        assert_eq!(rows[0], Rect::new(0, 0, 10, 2));
        assert_eq!(rows[1], Rect::new(0, 3, 10, 2));
        assert_eq!(rows[2], Rect::new(0, 6, 10, 0));
    }

    #[test]
    fn centered_column_narrows() {
        assert_eq!(centered_column(Rect::new(0, 0, 100, 5), 60), Rect::new(20, 0, 60, 5));
        assert_eq!(centered_column(Rect::new(0, 0, 40, 5), 60), Rect::new(0, 0, 40, 5));
    }
}
