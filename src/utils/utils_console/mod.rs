use colored::Colorize;

/// Prints the given string with the given color.
///
/// ## Example
/// ```
/// use nao_description::utils::utils_console::{robot_print, PrintMode, PrintColor};
/// robot_print("test", PrintMode::Println, PrintColor::Blue, false);
/// ```
pub fn robot_print(s: &str, mode: PrintMode, color: PrintColor, bolded: bool) {
    let mut string = if &color != &PrintColor::None {
        let c = color.get_color_triple();
        s.truecolor(c.0, c.1, c.2)
    } else {
        s.normal()
    };
    if bolded { string = string.bold(); }
    match mode {
        PrintMode::Println => { println!("{}", string); }
        PrintMode::Print => { print!("{}", string); }
    }
}

pub fn print_info(s: &str) {
    robot_print(&format!("[info] {}", s), PrintMode::Println, PrintColor::Cyan, false);
}

pub fn print_success(s: &str) {
    robot_print(&format!("[success] {}", s), PrintMode::Println, PrintColor::Green, false);
}

/// Warnings are never silenced.
pub fn print_warning(s: &str) {
    robot_print(&format!("[warning] {}", s), PrintMode::Println, PrintColor::Yellow, true);
}

pub fn print_error(s: &str) {
    robot_print(&format!("[error] {}", s), PrintMode::Println, PrintColor::Red, true);
}

/// Println will cause a new line after each line, while Print will not.
#[derive(Clone, Debug)]
pub enum PrintMode {
    Println,
    Print
}

/// Defines color for a robot_print command.
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
