use ratatui::style::Color;

pub struct Theme {
    pub fg: Color,
    pub primary: Color,   // Blue
    pub secondary: Color, // Orange
    pub comment: Color,   // Grey
    pub success: Color,   // Green
    pub error: Color,     // Red
    pub border_focused: Color,
    pub border_normal: Color,
    pub current_step_bg: Color,
    pub changed_field: Color, // Pink highlight for fields that just changed
    pub field_name: Color,    // Cyan for field names
    pub result: Color,
}

pub const DEFAULT_THEME: Theme = Theme {
    fg: Color::Rgb(205, 214, 244),
    primary: Color::Rgb(137, 180, 250),
    secondary: Color::Rgb(250, 179, 135),
    comment: Color::Rgb(108, 112, 134),
    success: Color::Rgb(166, 227, 161),
    error: Color::Rgb(243, 139, 168),
    border_focused: Color::Rgb(249, 226, 175),
    border_normal: Color::Rgb(108, 112, 134),
    current_step_bg: Color::Rgb(50, 50, 70),
    changed_field: Color::Rgb(245, 194, 231),
    field_name: Color::Rgb(148, 226, 213),
    result: Color::Rgb(166, 227, 161),
};
