//! Settings resolution.
//!
//! Every structurally invalid configuration value is replaced by its
//! documented default and reported as a [`SettingWarning`]; resolution never
//! fails, so a broken config file degrades to the stock defaults.

use crate::ports::config_port::ConfigPort;

#[derive(Debug, Clone)]
pub struct FilterSettings {
    pub max_price: f64,
    pub min_limit_up_percent: f64,
    pub exclude_st: bool,
    pub exclude_sci_tech_board: bool,
    pub stock_prefix: Vec<String>,
}

impl Default for FilterSettings {
    fn default() -> Self {
        Self {
            max_price: 40.0,
            min_limit_up_percent: 9.5,
            exclude_st: true,
            exclude_sci_tech_board: true,
            stock_prefix: vec!["0".to_string(), "6".to_string()],
        }
    }
}

#[derive(Debug, Clone)]
pub struct ScoreSettings {
    pub base_score: f64,
    pub volume_ratio_weight: f64,
    pub turnover_rate_weight: f64,
    pub continuous_limit_up_weight: f64,
    pub amount_weight: f64,
    pub amount_max_score: f64,
}

impl Default for ScoreSettings {
    fn default() -> Self {
        Self {
            base_score: 50.0,
            volume_ratio_weight: 5.0,
            turnover_rate_weight: 2.0,
            continuous_limit_up_weight: 10.0,
            amount_weight: 3.0,
            amount_max_score: 15.0,
        }
    }
}

#[derive(Debug, Clone)]
pub struct OutputSettings {
    pub top_count: usize,
    pub output_dir: String,
    pub auto_open: bool,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            top_count: 10,
            output_dir: "output".to_string(),
            auto_open: true,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Settings {
    pub filter: FilterSettings,
    pub score: ScoreSettings,
    pub output: OutputSettings,
}

/// A configuration value that was replaced by its default.
#[derive(Debug, Clone, PartialEq)]
pub struct SettingWarning {
    pub section: String,
    pub key: String,
    pub reason: String,
}

impl SettingWarning {
    fn new(section: &str, key: &str, reason: impl Into<String>) -> Self {
        Self {
            section: section.to_string(),
            key: key.to_string(),
            reason: reason.into(),
        }
    }
}

/// Resolve the effective settings from a config source, substituting defaults
/// for anything out of range and recording a warning per substitution.
pub fn resolve(config: &dyn ConfigPort) -> (Settings, Vec<SettingWarning>) {
    let mut warnings = Vec::new();
    let settings = Settings {
        filter: resolve_filter(config, &mut warnings),
        score: resolve_score(config, &mut warnings),
        output: resolve_output(config, &mut warnings),
    };
    (settings, warnings)
}

fn double_or_default(
    config: &dyn ConfigPort,
    warnings: &mut Vec<SettingWarning>,
    section: &str,
    key: &str,
    default: f64,
) -> f64 {
    match config.get_double(section, key) {
        Some(Ok(value)) => value,
        Some(Err(raw)) => {
            warnings.push(SettingWarning::new(
                section,
                key,
                format!("not a number: {raw:?}; using {default}"),
            ));
            default
        }
        None => default,
    }
}

fn int_or_default(
    config: &dyn ConfigPort,
    warnings: &mut Vec<SettingWarning>,
    section: &str,
    key: &str,
    default: i64,
) -> i64 {
    match config.get_int(section, key) {
        Some(Ok(value)) => value,
        Some(Err(raw)) => {
            warnings.push(SettingWarning::new(
                section,
                key,
                format!("not an integer: {raw:?}; using {default}"),
            ));
            default
        }
        None => default,
    }
}

fn bool_or_default(
    config: &dyn ConfigPort,
    warnings: &mut Vec<SettingWarning>,
    section: &str,
    key: &str,
    default: bool,
) -> bool {
    match config.get_bool(section, key) {
        Some(Ok(value)) => value,
        Some(Err(raw)) => {
            warnings.push(SettingWarning::new(
                section,
                key,
                format!("not a boolean: {raw:?}; using {default}"),
            ));
            default
        }
        None => default,
    }
}

fn resolve_filter(config: &dyn ConfigPort, warnings: &mut Vec<SettingWarning>) -> FilterSettings {
    let defaults = FilterSettings::default();

    let max_price = double_or_default(config, warnings, "filter", "max_price", defaults.max_price);
    let max_price = if max_price > 0.0 {
        max_price
    } else {
        warnings.push(SettingWarning::new(
            "filter",
            "max_price",
            format!("must be positive, got {max_price}; using 40"),
        ));
        defaults.max_price
    };

    let min_pct = double_or_default(
        config,
        warnings,
        "filter",
        "min_limit_up_percent",
        defaults.min_limit_up_percent,
    );
    let min_limit_up_percent = if (0.0..=20.0).contains(&min_pct) {
        min_pct
    } else {
        warnings.push(SettingWarning::new(
            "filter",
            "min_limit_up_percent",
            format!("must be in 0..=20, got {min_pct}; using 9.5"),
        ));
        defaults.min_limit_up_percent
    };

    let stock_prefix = match config.get_list("filter", "stock_prefix") {
        Some(list) if !list.is_empty() => list,
        Some(_) => {
            warnings.push(SettingWarning::new(
                "filter",
                "stock_prefix",
                "empty list; using [\"0\", \"6\"]",
            ));
            defaults.stock_prefix.clone()
        }
        None => defaults.stock_prefix.clone(),
    };

    FilterSettings {
        max_price,
        min_limit_up_percent,
        exclude_st: bool_or_default(config, warnings, "filter", "exclude_st", defaults.exclude_st),
        exclude_sci_tech_board: bool_or_default(
            config,
            warnings,
            "filter",
            "exclude_sci_tech_board",
            defaults.exclude_sci_tech_board,
        ),
        stock_prefix,
    }
}

fn resolve_score(config: &dyn ConfigPort, warnings: &mut Vec<SettingWarning>) -> ScoreSettings {
    let defaults = ScoreSettings::default();
    let mut weight = |key: &str, default: f64| {
        let value = double_or_default(config, warnings, "score", key, default);
        if value >= 0.0 {
            value
        } else {
            warnings.push(SettingWarning::new(
                "score",
                key,
                format!("must be non-negative, got {value}; using {default}"),
            ));
            default
        }
    };

    ScoreSettings {
        base_score: weight("base_score", defaults.base_score),
        volume_ratio_weight: weight("volume_ratio_weight", defaults.volume_ratio_weight),
        turnover_rate_weight: weight("turnover_rate_weight", defaults.turnover_rate_weight),
        continuous_limit_up_weight: weight(
            "continuous_limit_up_weight",
            defaults.continuous_limit_up_weight,
        ),
        amount_weight: weight("amount_weight", defaults.amount_weight),
        amount_max_score: weight("amount_max_score", defaults.amount_max_score),
    }
}

fn resolve_output(config: &dyn ConfigPort, warnings: &mut Vec<SettingWarning>) -> OutputSettings {
    let defaults = OutputSettings::default();

    let top_count = int_or_default(
        config,
        warnings,
        "output",
        "top_count",
        defaults.top_count as i64,
    );
    let top_count = if top_count > 0 {
        top_count as usize
    } else {
        warnings.push(SettingWarning::new(
            "output",
            "top_count",
            format!("must be a positive integer, got {top_count}; using 10"),
        ));
        defaults.top_count
    };

    let output_dir = match config.get_string("output", "output_dir") {
        Some(dir) if !dir.trim().is_empty() => dir,
        Some(_) => {
            warnings.push(SettingWarning::new(
                "output",
                "output_dir",
                "must be non-empty; using \"output\"",
            ));
            defaults.output_dir.clone()
        }
        None => defaults.output_dir.clone(),
    };

    OutputSettings {
        top_count,
        output_dir,
        auto_open: bool_or_default(config, warnings, "output", "auto_open", defaults.auto_open),
    }
}
