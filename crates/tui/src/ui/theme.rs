use ratatui::style::Color;

#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub text: Color,
    pub dim: Color,
    pub accent: Color,
    pub positive: Color,
    pub error: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            text: Color::Rgb(222, 226, 230),
            dim: Color::Rgb(108, 117, 125),
            accent: Color::Rgb(0, 109, 91),
            positive: Color::Rgb(64, 160, 96),
            error: Color::Rgb(220, 53, 69),
        }
    }
}
