//! 이상 랭킨 사이클 계산 로직을 라이브러리로 분리하여 CLI와 GUI가 함께 사용한다.

pub mod app;
pub mod config;
pub mod cycle;
pub mod diagram;
pub mod report;
pub mod steam;
pub mod units;
