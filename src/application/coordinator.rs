use crate::domain::{
    errors::AppResult,
    logging::{LogComponent, LogLevel, get_logger},
    rates::{RateBoard, RateRepository, RenderResult, compute_stats},
    state::BoardState,
};
use crate::{log_debug, log_warn};

/// Turns search-field events into fresh board renders
pub struct RateBoardCoordinator {
    board: RateBoard,
    state: BoardState,
}

impl RateBoardCoordinator {
    pub fn new(board: RateBoard) -> Self {
        let stats = compute_stats(board.records());
        get_logger().log_with_metadata(
            LogLevel::Info,
            LogComponent::Application("RateBoardCoordinator"),
            "📋 Rate board ready",
            &format!("{} records, {} counted toward statistics", board.len(), stats.included),
        );
        if board.is_empty() {
            log_warn!(
                LogComponent::Application("RateBoardCoordinator"),
                "⚠️ Base record list is empty, the board will show zero statistics"
            );
        }

        Self { board, state: BoardState::Unfiltered }
    }

    pub fn from_repository(repository: &impl RateRepository) -> AppResult<Self> {
        let records = repository.load_rates()?;
        Ok(Self::new(RateBoard::new(records)))
    }

    /// Unfiltered render used when the page first loads.
    pub fn initial_render(&mut self) -> RenderResult {
        self.handle_search_input("")
    }

    /// Apply the current search-field value. The value is used verbatim.
    pub fn handle_search_input(&mut self, raw: &str) -> RenderResult {
        let next = BoardState::from_term(raw);
        if next != self.state {
            log_debug!(
                LogComponent::Application("RateBoardCoordinator"),
                "🔎 {:?} -> {:?}",
                self.state,
                next
            );
        }
        self.state = next;

        let result = self.board.search(self.state.term());
        log_debug!(
            LogComponent::Application("RateBoardCoordinator"),
            "{} cards, avg {} max {} min {}",
            result.count,
            result.average,
            result.max,
            result.min
        );
        result
    }

    pub fn state(&self) -> &BoardState {
        &self.state
    }

    pub fn board(&self) -> &RateBoard {
        &self.board
    }
}
