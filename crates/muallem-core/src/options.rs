use serde::{Deserialize, Deserializer};

/// Caller-selected generation options. Unknown wire values fall back to the
/// default variant rather than rejecting the request.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(default)]
pub struct GenerationOptions {
    pub style: Style,
    pub level: Level,
    pub length: Length,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Style {
    Formal,
    Academic,
    #[default]
    Conversational,
}

impl<'de> Deserialize<'de> for Style {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Ok(match value.as_str() {
            "formal" => Style::Formal,
            "academic" => Style::Academic,
            _ => Style::Conversational,
        })
    }
}

impl Style {
    pub fn arabic(self) -> &'static str {
        match self {
            Style::Formal => "رسمي",
            Style::Academic => "أكاديمي",
            Style::Conversational => "محادثة طبيعية",
        }
    }

    /// Report prose uses a plainer label for the conversational register.
    pub fn report_arabic(self) -> &'static str {
        match self {
            Style::Conversational => "عام",
            other => other.arabic(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Level {
    Beginner,
    #[default]
    Intermediate,
    Advanced,
}

impl<'de> Deserialize<'de> for Level {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Ok(match value.as_str() {
            "beginner" => Level::Beginner,
            "advanced" => Level::Advanced,
            _ => Level::Intermediate,
        })
    }
}

impl Level {
    pub fn arabic(self) -> &'static str {
        match self {
            Level::Beginner => "مبتدئ",
            Level::Intermediate => "متوسط",
            Level::Advanced => "متقدم",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Length {
    Short,
    #[default]
    Medium,
    Long,
}

impl<'de> Deserialize<'de> for Length {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Ok(match value.as_str() {
            "short" => Length::Short,
            "long" => Length::Long,
            _ => Length::Medium,
        })
    }
}

impl Length {
    pub fn audio_arabic(self) -> &'static str {
        match self {
            Length::Short => "قصير (2-3 دقائق)",
            Length::Medium => "متوسط (5-6 دقائق)",
            Length::Long => "طويل (8-10 دقائق)",
        }
    }

    pub fn report_arabic(self) -> &'static str {
        match self {
            Length::Short => "قصير",
            Length::Medium => "متوسط",
            Length::Long => "طويل ومفصل",
        }
    }

    pub fn flashcard_count(self) -> usize {
        match self {
            Length::Short => 10,
            Length::Medium => 20,
            Length::Long => 30,
        }
    }

    pub fn quiz_count(self) -> usize {
        match self {
            Length::Short => 5,
            Length::Medium => 10,
            Length::Long => 15,
        }
    }

    pub fn slide_count(self) -> usize {
        match self {
            Length::Short => 8,
            Length::Medium => 12,
            Length::Long => 20,
        }
    }
}
