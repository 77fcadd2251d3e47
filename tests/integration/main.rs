//! Host integration tests for the candle control loop.

mod candle_tests;
mod mock_hw;
