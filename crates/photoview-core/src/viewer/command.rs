use std::path::PathBuf;
use std::str::FromStr;

use crate::error::ViewerError;
use crate::geometry::Vector;

/// A logical viewer operation, independent of the input device that raised it.
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    Open(PathBuf),
    Navigate(isize),
    Rotate(isize),
    SetZoom(f64),
    ZoomBy(f64),
    /// Frame displacement in source-image pixels, along on-screen axes.
    Pan(Vector),
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Open(path) => write!(f, "open {}", path.display()),
            Self::Navigate(offset) => write!(f, "nav {offset}"),
            Self::Rotate(steps) => write!(f, "rotate {steps}"),
            Self::SetZoom(zoom) => write!(f, "zoom {zoom}"),
            Self::ZoomBy(delta) => write!(f, "zoom+ {delta}"),
            Self::Pan(delta) => write!(f, "pan {} {}", delta.x, delta.y),
        }
    }
}

/// Parses the textual form used by replay scripts:
///
/// ```text
/// open photos/a.jpg
/// next | prev | nav -3
/// left | right | rotate 2
/// zoom 2.5 | zoom+ 0.5 | zoom- 0.5
/// pan 40 -12
/// ```
impl FromStr for Command {
    type Err = ViewerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let line = s.trim();
        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };

        let command = match verb.to_ascii_lowercase().as_str() {
            "open" if !rest.is_empty() => Self::Open(PathBuf::from(rest)),
            "next" => Self::Navigate(1),
            "prev" | "previous" => Self::Navigate(-1),
            "nav" => Self::Navigate(parse_arg(line, rest)?),
            "left" => Self::Rotate(-1),
            "right" => Self::Rotate(1),
            "rotate" => Self::Rotate(parse_arg(line, rest)?),
            "zoom" => Self::SetZoom(parse_arg(line, rest)?),
            "zoom+" => Self::ZoomBy(parse_arg(line, rest)?),
            "zoom-" => Self::ZoomBy(-parse_arg::<f64>(line, rest)?),
            "pan" => {
                let mut parts = rest.split_whitespace();
                let (Some(dx), Some(dy), None) = (parts.next(), parts.next(), parts.next()) else {
                    return Err(ViewerError::InvalidCommand(line.to_string()));
                };
                Self::Pan(Vector::new(parse_arg(line, dx)?, parse_arg(line, dy)?))
            }
            _ => return Err(ViewerError::InvalidCommand(line.to_string())),
        };
        Ok(command)
    }
}

fn parse_arg<T: FromStr>(line: &str, arg: &str) -> Result<T, ViewerError> {
    arg.parse()
        .map_err(|_| ViewerError::InvalidCommand(line.to_string()))
}
