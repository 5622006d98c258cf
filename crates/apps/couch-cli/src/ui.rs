use crossterm::style::{Color, Stylize};

pub const ACCENT: Color = Color::Rgb {
    r: 163,
    g: 133,
    b: 255,
}; // #A385FF
pub const ACTIVE: Color = Color::Rgb {
    r: 109,
    g: 255,
    b: 216,
}; // #6DFFD8
pub const DIM: Color = Color::Rgb {
    r: 102,
    g: 102,
    b: 102,
}; // #666666
pub const ERROR: Color = Color::Rgb {
    r: 255,
    g: 107,
    b: 107,
}; // #FF6B6B

#[derive(Debug, Clone, Copy, Default)]
pub struct Layout;

impl Layout {
    pub fn new() -> Self {
        Self
    }

    pub fn header(&self, title: &str) {
        println!();
        println!("  {}", title.to_uppercase().with(ACCENT).bold());
        println!("  {}", "━".repeat(title.chars().count() + 4).with(ACCENT));
        println!("{}", "│".with(DIM));
    }

    pub fn section_start(&self, code: &str, title: &str) {
        println!(
            "{}╭┄ {} [{}]",
            "│".with(DIM),
            code.with(ACCENT).bold(),
            title.bold()
        );
    }

    pub fn section_end(&self) {
        println!("{}", "├╯".with(DIM));
        println!("{}", "│".with(DIM));
    }

    pub fn row_property(&self, key: &str, value: &str) {
        println!("{}   {: <18} {}", "┊".with(DIM), key.with(DIM), value.bold());
    }

    pub fn item_simple(&self, content: &str) {
        println!("{}   {}", "┊".with(DIM), content);
    }

    pub fn success(&self, message: &str) {
        println!("{}   {} {}", "┊".with(DIM), "✓".with(ACTIVE), message);
    }

    pub fn error(&self, message: &str) {
        println!(
            "{}   {} {}",
            "┊".with(DIM),
            "✗".with(ERROR),
            message.with(ERROR)
        );
    }

    pub fn footer(&self, hint: &str) {
        println!("  {}", hint.with(DIM).italic());
    }
}
