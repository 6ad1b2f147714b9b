use tabled::settings::Color;

/// Color scheme for table columns
pub const TABLE_COLORS_ENTRIES: [Color; 3] =
    [Color::FG_MAGENTA, Color::FG_GREEN, Color::FG_BRIGHT_BLUE];

pub const TABLE_COLORS_EPISODES: [Color; 2] = [Color::FG_MAGENTA, Color::FG_GREEN];

pub const TABLE_COLORS_VIDEOS: [Color; 4] = [
    Color::FG_MAGENTA,
    Color::FG_GREEN,
    Color::FG_CYAN,
    Color::FG_BRIGHT_BLUE,
];

pub const TABLE_COLORS_DETAILS: [Color; 2] = [Color::FG_CYAN, Color::FG_WHITE];

pub const TABLE_HEADER_COLOR: Color = Color::FG_WHITE;

/// Template for the resolving spinner
pub const SPINNER_TEMPLATE: &str = "{spinner:.green} [{elapsed:.magenta}] {msg:.green}";
