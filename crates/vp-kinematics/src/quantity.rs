use std::fmt;

/// One of the five scalar quantities related by the constant-acceleration
/// equations of motion.
///
/// The declaration order is the canonical ordering used to interpret the
/// positional arguments of [`solve`](crate::solve).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KinematicQuantity {
    InitialVelocity,
    FinalVelocity,
    Acceleration,
    Distance,
    Time,
}

impl KinematicQuantity {
    /// All five quantities in canonical order.
    pub const CANONICAL: [KinematicQuantity; 5] = [
        KinematicQuantity::InitialVelocity,
        KinematicQuantity::FinalVelocity,
        KinematicQuantity::Acceleration,
        KinematicQuantity::Distance,
        KinematicQuantity::Time,
    ];
}

impl fmt::Display for KinematicQuantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            KinematicQuantity::InitialVelocity => "initial velocity",
            KinematicQuantity::FinalVelocity => "final velocity",
            KinematicQuantity::Acceleration => "acceleration",
            KinematicQuantity::Distance => "distance",
            KinematicQuantity::Time => "time",
        };
        f.write_str(name)
    }
}
