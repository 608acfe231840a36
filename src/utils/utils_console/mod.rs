use colored::Colorize;

/// Prints the given string with the given color.
///
/// ## Example
/// ```
/// use astrokin::utils::utils_console::{astrokin_print, PrintMode, PrintColor};
/// astrokin_print("test", PrintMode::Print, PrintColor::Blue, false);
/// ```
pub fn astrokin_print(s: &str, mode: PrintMode, color: PrintColor, bolded: bool) {
    let string = style_string(s, &color, bolded);
    match mode {
        PrintMode::Println => { println!("{}", string); }
        PrintMode::Print => { print!("{}", string); }
    }
}

pub fn astrokin_print_new_line() {
    astrokin_print("\n", PrintMode::Print, PrintColor::None, false);
}

fn style_string(s: &str, color: &PrintColor, bolded: bool) -> String {
    let mut styled = match color {
        PrintColor::None => { s.normal() }
        _ => {
            let c = color.get_color_triple();
            s.truecolor(c.0, c.1, c.2)
        }
    };
    if bolded { styled = styled.bold(); }
    styled.to_string()
}

/// Enum that is used in astrokin_print function.
/// Println will cause a new line after each line, while Print will not.
#[derive(Clone, Debug)]
pub enum PrintMode {
    Println,
    Print
}

/// Defines color for an astrokin print command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PrintColor {
    None,
    Blue,
    Green,
    Red,
    Yellow,
    Cyan,
    Magenta
}
impl PrintColor {
    pub fn get_color_triple(&self) -> (u8, u8, u8) {
        match self {
            PrintColor::None => { (0,0,0) }
            PrintColor::Blue => { return (0, 0, 255) }
            PrintColor::Green => { return (0, 255, 0) }
            PrintColor::Red => { return (255, 0, 0) }
            PrintColor::Yellow => { return (255, 255, 0) }
            PrintColor::Cyan => { return (0, 255, 255) }
            PrintColor::Magenta => { return (255, 0, 255) }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uncolored_text_is_preserved() {
        colored::control::set_override(false);
        assert_eq!(style_string("link 3", &PrintColor::None, false), "link 3");
        assert_eq!(style_string("link 3", &PrintColor::Blue, true), "link 3");
        colored::control::unset_override();
    }
}
