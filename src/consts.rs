pub mod cli_consts {
    //! Explorer Configuration Constants
    //!
    //! Tuning constants for the dataset loader and the terminal UI,
    //! organized by functional area.

    // =============================================================================
    // OVERVIEW CONFIGURATION
    // =============================================================================

    /// Number of sample rows shown in the overview (the dataset "head").
    pub const SAMPLE_ROW_COUNT: usize = 5;

    // =============================================================================
    // CHART CONFIGURATION
    // =============================================================================

    /// Bin count for the histograms on the pairwise grid diagonal.
    pub const HISTOGRAM_BINS: usize = 10;

    /// Whisker reach for box plots, as a multiple of the interquartile range.
    pub const WHISKER_IQR_MULTIPLIER: f64 = 1.5;

    /// Padding applied around scatter axis bounds, as a fraction of the range.
    pub const AXIS_PADDING_RATIO: f64 = 0.05;

    // =============================================================================
    // UI LOOP CONFIGURATION
    // =============================================================================

    /// Milliseconds between key-event polls in the UI loop.
    pub const KEY_POLL_INTERVAL_MS: u64 = 100;

    /// How long the splash screen stays up before the explorer opens.
    pub const SPLASH_DURATION_MS: u64 = 1500;
}
