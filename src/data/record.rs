//! Record Model
//! Typed bank marketing rows and the fixed list of tracked dimensions.

use std::fmt;

/// Plain RGB color shared by the interactive and static renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Hex notation, e.g. `#4682b4`.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

pub const STEELBLUE: Rgb = Rgb(70, 130, 180); // Subscribed
pub const ORANGE: Rgb = Rgb(255, 165, 0); // Not subscribed
pub const NEUTRAL_GRAY: Rgb = Rgb(204, 204, 204); // Background layer

/// Campaign outcome derived from the `y` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    Subscribed,
    NotSubscribed,
}

impl Outcome {
    /// Only the literal `"yes"` counts as a subscription.
    pub fn from_label(y: &str) -> Self {
        if y == "yes" {
            Outcome::Subscribed
        } else {
            Outcome::NotSubscribed
        }
    }

    pub fn color(self) -> Rgb {
        match self {
            Outcome::Subscribed => STEELBLUE,
            Outcome::NotSubscribed => ORANGE,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Outcome::Subscribed => "Subscribed",
            Outcome::NotSubscribed => "Not subscribed",
        }
    }

    /// Legend order.
    pub const ALL: [Outcome; 2] = [Outcome::Subscribed, Outcome::NotSubscribed];
}

/// One of the six numeric fields used for both outlier trimming and axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Dimension {
    Age,
    Balance,
    Duration,
    Campaign,
    Previous,
    Pdays,
}

impl Dimension {
    /// Fixed left-to-right axis order.
    pub const ALL: [Dimension; 6] = [
        Dimension::Age,
        Dimension::Balance,
        Dimension::Duration,
        Dimension::Campaign,
        Dimension::Previous,
        Dimension::Pdays,
    ];

    /// Column name in the source file.
    pub fn column(self) -> &'static str {
        match self {
            Dimension::Age => "age",
            Dimension::Balance => "balance",
            Dimension::Duration => "duration",
            Dimension::Campaign => "campaign",
            Dimension::Previous => "previous",
            Dimension::Pdays => "pdays",
        }
    }

    /// Axis label shown above each axis.
    pub fn label(self) -> &'static str {
        match self {
            Dimension::Age => "Age (years)",
            Dimension::Balance => "Account Balance (€)",
            Dimension::Duration => "Call Duration (min)",
            Dimension::Campaign => "Contacts in Current Campaign",
            Dimension::Previous => "Previous Contacts",
            Dimension::Pdays => "Days Since Last Contact",
        }
    }

    /// Position in [`Dimension::ALL`].
    pub fn ordinal(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column())
    }
}

/// A cleaned bank marketing record.
#[derive(Debug, Clone, PartialEq)]
pub struct BankRecord {
    pub age: f64,
    pub balance: f64,
    /// Call duration in minutes.
    pub duration: f64,
    pub campaign: f64,
    pub previous: f64,
    pub pdays: f64,
    pub job: String,
    pub y: String,
    pub color: Rgb,
}

impl BankRecord {
    /// Build a record from already-coerced values. `duration_secs` is converted
    /// to minutes and the color is derived from `y`.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        age: f64,
        balance: f64,
        duration_secs: f64,
        campaign: f64,
        previous: f64,
        pdays: f64,
        job: impl Into<String>,
        y: impl Into<String>,
    ) -> Self {
        let y = y.into();
        let color = Outcome::from_label(&y).color();
        Self {
            age,
            balance,
            duration: duration_secs / 60.0,
            campaign,
            previous,
            pdays,
            job: job.into(),
            y,
            color,
        }
    }

    pub fn outcome(&self) -> Outcome {
        Outcome::from_label(&self.y)
    }

    /// Value of a tracked field.
    pub fn value(&self, dimension: Dimension) -> f64 {
        match dimension {
            Dimension::Age => self.age,
            Dimension::Balance => self.balance,
            Dimension::Duration => self.duration,
            Dimension::Campaign => self.campaign,
            Dimension::Previous => self.previous,
            Dimension::Pdays => self.pdays,
        }
    }

    /// True when any tracked field failed numeric coercion.
    pub fn has_missing_values(&self) -> bool {
        Dimension::ALL.iter().any(|&d| self.value(d).is_nan())
    }
}
