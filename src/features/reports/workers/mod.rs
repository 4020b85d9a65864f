mod analysis_worker;

pub use analysis_worker::AnalysisWorker;
