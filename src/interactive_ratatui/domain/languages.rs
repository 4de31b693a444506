use ratatui::style::Color;

/// Languages offered by the picker, in display order.
pub const LANGUAGES: [&str; 20] = [
    "Angular",
    "C",
    "C#",
    "C++",
    "CSS",
    "Codeigniter",
    "Go",
    "HTML",
    "Java",
    "JavaScript",
    "Kotlin",
    "Laravel",
    "PHP",
    "Python",
    "React",
    "Ruby",
    "Rust",
    "Swift",
    "TypeScript",
    "Vue",
];

const FALLBACK_LANGUAGE_COLOR: Color = rgb(0x8b949e);
const FALLBACK_LABEL_COLOR: Color = rgb(0x777777);

const fn rgb(hex: u32) -> Color {
    Color::Rgb((hex >> 16) as u8, (hex >> 8) as u8, hex as u8)
}

/// GitHub's linguist colour for a language.
pub fn language_color(language: &str) -> Color {
    match language {
        "JavaScript" => rgb(0xf1e05a),
        "TypeScript" => rgb(0x3178c6),
        "Python" => rgb(0x3572a5),
        "Java" => rgb(0xb07219),
        "C#" => rgb(0x178600),
        "PHP" => rgb(0x4f5d95),
        "C++" => rgb(0xf34b7d),
        "C" => rgb(0x555555),
        "Ruby" => rgb(0x701516),
        "Go" => rgb(0x00add8),
        "Swift" => rgb(0xf05138),
        "Kotlin" => rgb(0xa97bff),
        "Rust" => rgb(0xdea584),
        "HTML" => rgb(0xe34c26),
        "CSS" => rgb(0x563d7c),
        "Shell" => rgb(0x89e051),
        "Dart" => rgb(0x00b4ab),
        "React" => rgb(0x61dafb),
        "Vue" => rgb(0x41b883),
        "Angular" => rgb(0xdd0031),
        "Laravel" => rgb(0xff2d20),
        "Codeigniter" => rgb(0xee4323),
        _ => FALLBACK_LANGUAGE_COLOR,
    }
}

pub fn label_color(label: &str) -> Color {
    match label {
        "good first issue" => rgb(0x7057ff),
        "documentation" => rgb(0x0075ca),
        "enhancement" => rgb(0xa2eeef),
        "bug" => rgb(0xd73a4a),
        "help wanted" => rgb(0x008672),
        "question" => rgb(0xd876e3),
        _ => FALLBACK_LABEL_COLOR,
    }
}
