//! Curve geometry for the beam diagram: node centers, the horizontal
//! S-curves between them, and arc-length sampling along those curves.

use std::fmt::Write;

/// Number of chord segments used to approximate a curve's arc length.
const ARC_SAMPLES: usize = 64;

/// A position in container pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
	/// Pixels from the container's left edge.
	pub x: f64,
	/// Pixels from the container's top edge.
	pub y: f64,
}

impl Point {
	/// Point at `(x, y)`.
	pub const fn new(x: f64, y: f64) -> Self {
		Self { x, y }
	}

	fn distance(self, other: Self) -> f64 {
		(other.x - self.x).hypot(other.y - self.y)
	}

	fn lerp(self, other: Self, t: f64) -> Self {
		Self::new(
			self.x + (other.x - self.x) * t,
			self.y + (other.y - self.y) * t,
		)
	}
}

/// Center of a box given its client rect and its container's, relative to
/// the container's top-left corner.
pub fn center_in(left: f64, top: f64, width: f64, height: f64, origin: Point) -> Point {
	Point::new(left - origin.x + width / 2.0, top - origin.y + height / 2.0)
}

/// A cubic Bézier curve.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CubicBezier {
	/// First endpoint.
	pub start: Point,
	/// Control point leaving `start`.
	pub c1: Point,
	/// Control point approaching `end`.
	pub c2: Point,
	/// Last endpoint.
	pub end: Point,
}

impl CubicBezier {
	/// Horizontally dominant S-curve: control points sit at 40% and 60% of
	/// the horizontal span, each level with its own endpoint.
	pub fn horizontal_s(start: Point, end: Point) -> Self {
		let dx = end.x - start.x;
		Self {
			start,
			c1: Point::new(start.x + dx * 0.4, start.y),
			c2: Point::new(start.x + dx * 0.6, end.y),
			end,
		}
	}

	/// Point at parameter `t` in `[0, 1]`.
	pub fn point(&self, t: f64) -> Point {
		let mt = 1.0 - t;
		let (a, b, c, d) = (mt * mt * mt, 3.0 * mt * mt * t, 3.0 * mt * t * t, t * t * t);
		Point::new(
			a * self.start.x + b * self.c1.x + c * self.c2.x + d * self.end.x,
			a * self.start.y + b * self.c1.y + c * self.c2.y + d * self.end.y,
		)
	}

	/// SVG path data, `M x,y C x,y x,y x,y`.
	pub fn svg_path(&self) -> String {
		let mut d = String::new();
		let _ = write!(
			d,
			"M{},{} C{},{} {},{} {},{}",
			self.start.x,
			self.start.y,
			self.c1.x,
			self.c1.y,
			self.c2.x,
			self.c2.y,
			self.end.x,
			self.end.y
		);
		d
	}
}

/// Which side of the hub a peripheral node sits on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
	/// Feeds into the hub; the beam runs node to center.
	Left,
	/// Fed by the hub; the beam runs center to node.
	Right,
}

/// A beam between a peripheral node and the hub, with a cumulative
/// arc-length table for constant-speed sampling.
#[derive(Clone, Debug, PartialEq)]
pub struct BeamPath {
	/// The drawn curve, oriented in travel direction.
	pub curve: CubicBezier,
	/// Set for beams leaving the hub.
	pub reverse: bool,
	lengths: Vec<f64>,
}

impl BeamPath {
	/// Beam between `node` and the hub at `center`.
	pub fn new(node: Point, center: Point, side: Side) -> Self {
		let (start, end) = match side {
			Side::Left => (node, center),
			Side::Right => (center, node),
		};
		let curve = CubicBezier::horizontal_s(start, end);

		let mut lengths = Vec::with_capacity(ARC_SAMPLES + 1);
		let mut total = 0.0;
		let mut prev = curve.start;
		lengths.push(0.0);
		for i in 1..=ARC_SAMPLES {
			let p = curve.point(i as f64 / ARC_SAMPLES as f64);
			total += prev.distance(p);
			lengths.push(total);
			prev = p;
		}

		Self {
			curve,
			reverse: side == Side::Right,
			lengths,
		}
	}

	/// Approximate arc length.
	pub fn length(&self) -> f64 {
		self.lengths.last().copied().unwrap_or(0.0)
	}

	/// Point at `fraction` of the curve's arc length, clamped to `[0, 1]`.
	pub fn point_at_fraction(&self, fraction: f64) -> Point {
		let total = self.length();
		if total <= f64::EPSILON {
			return self.curve.start;
		}
		let target = fraction.clamp(0.0, 1.0) * total;
		let i = self
			.lengths
			.partition_point(|&len| len < target)
			.clamp(1, ARC_SAMPLES);
		let (before, after) = (self.lengths[i - 1], self.lengths[i]);
		let seg = after - before;
		let local = if seg > 0.0 { (target - before) / seg } else { 0.0 };
		let step = 1.0 / ARC_SAMPLES as f64;
		let t0 = (i - 1) as f64 * step;
		self.curve
			.point(t0)
			.lerp(self.curve.point(t0 + step), local)
	}
}
