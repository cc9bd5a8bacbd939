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

/// Split the body into the draft entry box, the filter tab line, and the
/// list area.
pub fn split_body(body: Rect) -> (Rect, Rect, Rect) {
    let entry_height = body.height.min(3);
    let tabs_height = 1.min(body.height.saturating_sub(entry_height));
    let entry = Rect {
        x: body.x,
        y: body.y,
        width: body.width,
        height: entry_height,
    };
    let tabs = Rect {
        x: body.x,
        y: body.y + entry_height,
        width: body.width,
        height: tabs_height,
    };
    let list = Rect {
        x: body.x,
        y: body.y + entry_height + tabs_height,
        width: body.width,
        height: body.height.saturating_sub(entry_height + tabs_height),
    };
    (entry, tabs, list)
}
