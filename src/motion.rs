/// Easing curves used by the scroll channels and the back-to-top ramp.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Ease {
    Linear,
    CubicOut,
    CubicInOut,
}

impl Ease {
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Ease::Linear => t,
            Ease::CubicOut => 1.0 - (1.0 - t).powi(3),
            Ease::CubicInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
        }
    }
}

/// Damped spring for the cursor ring. Stepped with semi-implicit Euler from
/// the animation-frame loop; `dt` is clamped by the caller.
#[derive(Clone, Copy, Debug)]
pub struct Spring {
    pub stiffness: f64,
    pub damping: f64,
    pub mass: f64,
}

impl Spring {
    /// Damping set to 2·√(k·m): returns to the target as fast as possible
    /// without oscillating.
    pub fn critically_damped(stiffness: f64, mass: f64) -> Self {
        Self {
            stiffness,
            damping: 2.0 * (stiffness * mass).sqrt(),
            mass,
        }
    }

    pub fn step(&self, position: f64, velocity: f64, target: f64, dt: f64) -> (f64, f64) {
        let accel = (-self.stiffness * (position - target) - self.damping * velocity) / self.mass;
        let velocity = velocity + accel * dt;
        (position + velocity * dt, velocity)
    }
}

/// 2D spring state for a screen-space follower.
#[derive(Clone, Copy, Debug, Default)]
pub struct SpringPoint {
    pub x: f64,
    pub y: f64,
    vx: f64,
    vy: f64,
}

impl SpringPoint {
    pub fn at(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            vx: 0.0,
            vy: 0.0,
        }
    }

    pub fn step(&mut self, spring: &Spring, target_x: f64, target_y: f64, dt: f64) {
        let (x, vx) = spring.step(self.x, self.vx, target_x, dt);
        let (y, vy) = spring.step(self.y, self.vy, target_y, dt);
        self.x = x;
        self.y = y;
        self.vx = vx;
        self.vy = vy;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn easings_hit_their_endpoints() {
        for ease in [Ease::Linear, Ease::CubicOut, Ease::CubicInOut] {
            assert_eq!(ease.apply(0.0), 0.0);
            assert!((ease.apply(1.0) - 1.0).abs() < 1e-12);
        }
        assert_eq!(Ease::CubicInOut.apply(0.5), 0.5);
    }

    #[test]
    fn easings_clamp_out_of_range_input() {
        assert_eq!(Ease::CubicOut.apply(-2.0), 0.0);
        assert!((Ease::CubicOut.apply(3.0) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn critically_damped_spring_converges_without_overshoot() {
        let spring = Spring::critically_damped(200.0, 0.5);
        assert!((spring.damping - 20.0).abs() < 1e-9);

        let dt = 1.0 / 120.0;
        let (mut x, mut v) = (1.0, 0.0);
        for _ in 0..600 {
            let (nx, nv) = spring.step(x, v, 0.0, dt);
            x = nx;
            v = nv;
            // Starting from rest it must never swing past the target.
            assert!(x >= 0.0, "overshoot: {x}");
        }
        assert!(x.abs() < 1e-6);
    }

    #[test]
    fn spring_at_rest_on_target_stays_put() {
        let spring = Spring::critically_damped(200.0, 0.5);
        let (x, v) = spring.step(42.0, 0.0, 42.0, 1.0 / 60.0);
        assert_eq!(x, 42.0);
        assert_eq!(v, 0.0);
    }

    #[test]
    fn spring_point_follows_a_moving_target() {
        let spring = Spring::critically_damped(200.0, 0.5);
        let mut point = SpringPoint::at(0.0, 0.0);
        for _ in 0..600 {
            point.step(&spring, 320.0, 240.0, 1.0 / 120.0);
        }
        assert!((point.x - 320.0).abs() < 1e-3);
        assert!((point.y - 240.0).abs() < 1e-3);
    }
}
