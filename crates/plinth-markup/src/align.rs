//! Image alignment detection and the fixed wrapper class strings.

/// Horizontal placement of an image, derived from the alignment marker
/// token in its class attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Alignment {
    Center,
    Left,
    Right,
    None,
}

impl Alignment {
    /// Parse an exact alignment token.
    ///
    /// Returns `None` for anything other than the four recognized markers.
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "aligncenter" => Some(Self::Center),
            "alignleft" => Some(Self::Left),
            "alignright" => Some(Self::Right),
            "alignnone" => Some(Self::None),
            _ => None,
        }
    }

    /// Detect the alignment marker inside a matched tag snippet.
    ///
    /// Substring search over the whole snippet, checked in the fixed
    /// precedence order center, left, right, none.
    pub fn detect(snippet: &str) -> Option<Self> {
        if snippet.contains("aligncenter") {
            Some(Self::Center)
        } else if snippet.contains("alignleft") {
            Some(Self::Left)
        } else if snippet.contains("alignright") {
            Some(Self::Right)
        } else if snippet.contains("alignnone") {
            Some(Self::None)
        } else {
            None
        }
    }

    /// Class string for the `<figure>` wrapper of this alignment.
    #[must_use]
    pub fn figure_classes(self) -> &'static str {
        match self {
            Self::Center => "figure text-center d-block",
            Self::Left => "figure float-sm-none float-md-left text-center mr-md-3 d-block",
            Self::Right => "figure float-sm-none float-md-right text-center ml-md-3 d-block",
            Self::None => "figure text-center text-md-left d-block",
        }
    }

    /// Class string for the `<figcaption>` of a captioned figure.
    ///
    /// Center and none carry the bare caption class; left and right add
    /// their responsive text-alignment classes.
    #[must_use]
    pub fn figcaption_classes(self) -> &'static str {
        match self {
            Self::Left => "figure-caption text-center text-md-left",
            Self::Right => "figure-caption text-center text-md-right",
            Self::Center | Self::None => "figure-caption",
        }
    }
}
