//! Shared holder for the current token.

// self
use crate::{_prelude::*, auth::TokenState};

/// Single mutable cell holding the session's [`TokenState`].
///
/// Readers get snapshots; the grant flows replace the whole state at once, so a reader never
/// observes a half-written token. Concurrent exchanges are not sequenced: the last one to
/// finish wins. Clones share the same cell.
#[derive(Clone, Debug, Default)]
pub struct TokenCell(Arc<RwLock<TokenState>>);
impl TokenCell {
	/// Creates a cell seeded with `state`.
	pub fn new(state: TokenState) -> Self {
		Self(Arc::new(RwLock::new(state)))
	}

	/// Returns a copy of the current token state.
	pub fn snapshot(&self) -> TokenState {
		self.0.read().clone()
	}

	pub(crate) fn replace(&self, state: TokenState) {
		*self.0.write() = state;
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn snapshots_are_stable_until_replaced() {
		let cell = TokenCell::default();

		assert_eq!(cell.snapshot(), TokenState::default());
		assert_eq!(cell.snapshot(), cell.snapshot());

		let shared = cell.clone();

		shared.replace(TokenState { access_token: "T1".into(), ..Default::default() });

		assert_eq!(cell.snapshot().access_token.expose(), "T1");
	}

	#[test]
	fn snapshot_is_detached_from_later_replacements() {
		let cell = TokenCell::new(TokenState { access_token: "T1".into(), ..Default::default() });
		let before = cell.snapshot();

		cell.replace(TokenState { access_token: "T2".into(), ..Default::default() });

		assert_eq!(before.access_token.expose(), "T1");
		assert_eq!(cell.snapshot().access_token.expose(), "T2");
	}
}
