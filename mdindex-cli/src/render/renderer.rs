use mdindex_core::IndexReport;
use termimad::{
    MadSkin,
    crossterm::style::{Attribute, Color},
};

pub struct Renderer {
    skin: MadSkin,
    use_color: bool,
}

impl Renderer {
    pub fn new(use_color: bool) -> Self {
        Self {
            skin: default_skin(),
            use_color,
        }
    }

    pub fn print_info(&self, message: &str) {
        if self.use_color {
            self.skin.print_text(message);
        } else {
            println!("{message}");
        }
    }

    /// The three summary lines the tool promises on success.
    pub fn print_report(&self, report: &IndexReport) {
        self.print_info(&format!("Updated {}", report.output_path.display()));
        self.print_info(&format!("Categories: {}", report.categories.join(", ")));
        self.print_info(&format!("Total projects: {}", report.total));
    }
}

fn default_skin() -> MadSkin {
    let mut skin = MadSkin::default();
    skin.bold.set_fg(Color::Yellow);
    skin.inline_code.set_fg(Color::Green);
    skin.headers[0].add_attr(Attribute::Bold);
    skin
}
