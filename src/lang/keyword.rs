use super::Cursor;

/// Script keywords in table order. The discriminant is the stable
/// command id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keyword {
    Angry,
    Happy,
    Move,
    Turn,
    Arc,
    Delay,
    Colour,
    Color,
    Pixel,
    Set,
    If,
    Do,
    While,
    Intime,
    Endif,
    Forever,
    Endwhile,
    Sound,
    Until,
    Clear,
    Run,
    Background,
    Else,
    Red,
    Green,
    Blue,
    Yellow,
    Magenta,
    Cyan,
    White,
    Black,
    Wait,
    Stop,
    Begin,
    End,
    Print,
    Println,
    Break,
    Duration,
    Continue,
    Angle,
}

const KEYWORDS: [(&str, Keyword); 41] = [
    ("angry", Keyword::Angry),
    ("happy", Keyword::Happy),
    ("move", Keyword::Move),
    ("turn", Keyword::Turn),
    ("arc", Keyword::Arc),
    ("delay", Keyword::Delay),
    ("colour", Keyword::Colour),
    ("color", Keyword::Color),
    ("pixel", Keyword::Pixel),
    ("set", Keyword::Set),
    ("if", Keyword::If),
    ("do", Keyword::Do),
    ("while", Keyword::While),
    ("intime", Keyword::Intime),
    ("endif", Keyword::Endif),
    ("forever", Keyword::Forever),
    ("endwhile", Keyword::Endwhile),
    ("sound", Keyword::Sound),
    ("until", Keyword::Until),
    ("clear", Keyword::Clear),
    ("run", Keyword::Run),
    ("background", Keyword::Background),
    ("else", Keyword::Else),
    ("red", Keyword::Red),
    ("green", Keyword::Green),
    ("blue", Keyword::Blue),
    ("yellow", Keyword::Yellow),
    ("magenta", Keyword::Magenta),
    ("cyan", Keyword::Cyan),
    ("white", Keyword::White),
    ("black", Keyword::Black),
    ("wait", Keyword::Wait),
    ("stop", Keyword::Stop),
    ("begin", Keyword::Begin),
    ("end", Keyword::End),
    ("print", Keyword::Print),
    ("println", Keyword::Println),
    ("break", Keyword::Break),
    ("duration", Keyword::Duration),
    ("continue", Keyword::Continue),
    ("angle", Keyword::Angle),
];

impl Keyword {
    pub fn id(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        KEYWORDS[self.id()].0
    }

    /// Matches a keyword at the cursor. The word must be followed by a
    /// space or the end of the line, so `movex` is not `move`. The cursor
    /// only advances on a match.
    pub fn match_at(cursor: &mut Cursor) -> Option<Keyword> {
        let rest = cursor.rest();
        for (name, keyword) in KEYWORDS.iter() {
            let name = name.as_bytes();
            if rest.len() < name.len() || !rest[..name.len()].eq_ignore_ascii_case(name) {
                continue;
            }
            match rest.get(name.len()) {
                None | Some(b' ') => {
                    cursor.advance(name.len());
                    return Some(*keyword);
                }
                _ => continue,
            }
        }
        None
    }
}

impl std::fmt::Display for Keyword {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
