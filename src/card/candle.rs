//! Candle track. Blowing it out is one-way.

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum CandleStage {
    #[default]
    Lit,
    Blown,
}

#[derive(Debug, Default)]
pub struct Candle {
    stage: CandleStage,
}

impl Candle {
    pub fn stage(&self) -> CandleStage {
        self.stage
    }

    pub fn is_blown(&self) -> bool {
        self.stage == CandleStage::Blown
    }

    /// Returns `true` only on the call that actually blew it out.
    pub fn blow(&mut self) -> bool {
        if self.is_blown() {
            return false;
        }
        self.stage = CandleStage::Blown;
        tracing::debug!("candle blown");
        true
    }
}
