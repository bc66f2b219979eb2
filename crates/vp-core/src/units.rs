// vp-core/src/units.rs

use uom::si::f64::{
    Acceleration as UomAcceleration, Angle as UomAngle, AngularVelocity as UomAngularVelocity,
    Length as UomLength, Time as UomTime, Velocity as UomVelocity,
};

// Public canonical unit types (SI, f64)
pub type Accel = UomAcceleration;
pub type Angle = UomAngle;
pub type AngularVel = UomAngularVelocity;
pub type Length = UomLength;
pub type Time = UomTime;
pub type Velocity = UomVelocity;

#[inline]
pub fn m(v: f64) -> Length {
    use uom::si::length::meter;
    Length::new::<meter>(v)
}

#[inline]
pub fn s(v: f64) -> Time {
    use uom::si::time::second;
    Time::new::<second>(v)
}

#[inline]
pub fn mps(v: f64) -> Velocity {
    use uom::si::velocity::meter_per_second;
    Velocity::new::<meter_per_second>(v)
}

#[inline]
pub fn mps2(v: f64) -> Accel {
    use uom::si::acceleration::meter_per_second_squared;
    Accel::new::<meter_per_second_squared>(v)
}

#[inline]
pub fn rad(v: f64) -> Angle {
    use uom::si::angle::radian;
    Angle::new::<radian>(v)
}

#[inline]
pub fn radps(v: f64) -> AngularVel {
    use uom::si::angular_velocity::radian_per_second;
    AngularVel::new::<radian_per_second>(v)
}

/// Extract the SI base value (meters, seconds, radians, ...) of a quantity.
pub mod si {
    use super::*;

    #[inline]
    pub fn meters(v: Length) -> f64 {
        v.get::<uom::si::length::meter>()
    }

    #[inline]
    pub fn seconds(v: Time) -> f64 {
        v.get::<uom::si::time::second>()
    }

    #[inline]
    pub fn meters_per_second(v: Velocity) -> f64 {
        v.get::<uom::si::velocity::meter_per_second>()
    }

    #[inline]
    pub fn radians(v: Angle) -> f64 {
        v.get::<uom::si::angle::radian>()
    }

    #[inline]
    pub fn radians_per_second(v: AngularVel) -> f64 {
        v.get::<uom::si::angular_velocity::radian_per_second>()
    }
}
