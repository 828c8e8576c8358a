use {std::cmp::Reverse, ordered_float::OrderedFloat};

/// Species indices ordered from largest to smallest peak mole fraction
#[derive(Debug, PartialEq, Eq, Clone, derive_more::Deref)] pub struct Rank(Box<[usize]>);

/// Ranks species by descending peak. Equal peaks keep species order: the earliest index wins
pub fn rank(peaks: &[f64]) -> Rank {
	let mut order = (0..peaks.len()).collect::<Box<[usize]>>();
	order.sort_by_key(|&k| Reverse(OrderedFloat(peaks[k]))); // stable
	Rank(order)
}

impl Rank {
	pub fn top(&self, count: usize) -> &[usize] { &self[..count.min(self.len())] }
}
