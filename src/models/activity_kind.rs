/// Discriminant of an [`Activity`](super::activity::Activity), used for breakdowns and display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActivityKind {
    Transport,
    Electricity,
    Water,
    Waste,
}

impl ActivityKind {
    pub const ALL: [ActivityKind; 4] = [
        ActivityKind::Transport,
        ActivityKind::Electricity,
        ActivityKind::Water,
        ActivityKind::Waste,
    ];

    /// Value of the `type` discriminator in the persisted document.
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityKind::Transport => "transport",
            ActivityKind::Electricity => "electricity",
            ActivityKind::Water => "water",
            ActivityKind::Waste => "waste",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ActivityKind::Transport => "Transport",
            ActivityKind::Electricity => "Electricity",
            ActivityKind::Water => "Water",
            ActivityKind::Waste => "Waste",
        }
    }

    /// Unit of the measured quantity.
    pub fn unit(&self) -> &'static str {
        match self {
            ActivityKind::Transport => "km",
            ActivityKind::Electricity => "kWh",
            ActivityKind::Water => "litres",
            ActivityKind::Waste => "kg",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            ActivityKind::Transport => "🚗",
            ActivityKind::Electricity => "⚡",
            ActivityKind::Water => "💧",
            ActivityKind::Waste => "🗑️",
        }
    }
}
