#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// `k` を指定しなかった場合の目標ボックス数
pub const EXTRACT_BOXES_DEFAULT: u32 = 10;

/// `k` に指定できる最大値
pub const EXTRACT_BOXES_MAX: u32 = 1000;

/// [`SplitStrategy::Fixed`] が用いる目標ボックス数
pub const EXTRACT_BOXES_FIXED: u32 = 20;

/// シーケンスの分割方法
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SplitStrategy {
    /// 目標ボックス数 `k` で等分割する
    #[default]
    EquiSplit,
    /// `k` を無視し、常に [`EXTRACT_BOXES_FIXED`] 個を目標に等分割する
    Fixed,
}

/// インデックス単位で設定される分割の設定
///
/// `k` は常に `1..=EXTRACT_BOXES_MAX` の範囲にある。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawSplitConfig"))]
pub struct SplitConfig {
    strategy: SplitStrategy,
    k: u32,
}

/// 読み込み時に `k` を検証するための中間表現
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RawSplitConfig {
    #[serde(default)]
    strategy: SplitStrategy,
    #[serde(default = "default_k")]
    k: i64,
}

#[cfg(feature = "serde")]
fn default_k() -> i64 {
    EXTRACT_BOXES_DEFAULT as i64
}

#[cfg(feature = "serde")]
impl TryFrom<RawSplitConfig> for SplitConfig {
    type Error = Error;

    fn try_from(raw: RawSplitConfig) -> Result<Self, Self::Error> {
        let config = SplitConfig::new(raw.k)?;
        Ok(config.with_strategy(raw.strategy))
    }
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            strategy: SplitStrategy::EquiSplit,
            k: EXTRACT_BOXES_DEFAULT,
        }
    }
}

impl SplitConfig {
    /// 目標ボックス数 `k` で等分割する設定を作成する。
    ///
    /// ```
    /// # use tpoint_megist::{SplitConfig, Error};
    /// assert_eq!(SplitConfig::new(25).unwrap().target_boxes(), 25);
    /// assert_eq!(SplitConfig::new(0), Err(Error::ConfigOutOfRange { k: 0 }));
    /// assert_eq!(SplitConfig::new(1001), Err(Error::ConfigOutOfRange { k: 1001 }));
    /// ```
    pub fn new(k: i64) -> Result<SplitConfig, Error> {
        if !(1..=EXTRACT_BOXES_MAX as i64).contains(&k) {
            return Err(Error::ConfigOutOfRange { k });
        }
        Ok(SplitConfig {
            strategy: SplitStrategy::EquiSplit,
            k: k as u32,
        })
    }

    /// `k` を `1..=EXTRACT_BOXES_MAX` に丸めて設定を作成する。
    pub fn clamped(k: i64) -> SplitConfig {
        SplitConfig {
            strategy: SplitStrategy::EquiSplit,
            k: k.clamp(1, EXTRACT_BOXES_MAX as i64) as u32,
        }
    }

    /// 常に [`EXTRACT_BOXES_FIXED`] 個を目標にする設定を作成する。
    pub fn fixed() -> SplitConfig {
        SplitConfig {
            strategy: SplitStrategy::Fixed,
            k: EXTRACT_BOXES_FIXED,
        }
    }

    pub fn strategy(&self) -> SplitStrategy {
        self.strategy
    }

    /// 分割に用いる目標ボックス数
    pub fn target_boxes(&self) -> usize {
        match self.strategy {
            SplitStrategy::EquiSplit => self.k as usize,
            SplitStrategy::Fixed => EXTRACT_BOXES_FIXED as usize,
        }
    }

    /// `"k=25, strategy=equisplit"` のようなオプション文字列から設定を読み込む。
    ///
    /// キーは大文字小文字を区別しない。認識されるキーは `k` と `strategy`
    /// （`equisplit` または `fixed`）のみ。空文字列の場合は既定値になる。
    ///
    /// ```
    /// # use tpoint_megist::{SplitConfig, SplitStrategy, Error};
    /// let config = SplitConfig::from_options("K = 40").unwrap();
    /// assert_eq!(config.target_boxes(), 40);
    ///
    /// let config = SplitConfig::from_options("strategy=fixed").unwrap();
    /// assert_eq!(config.strategy(), SplitStrategy::Fixed);
    ///
    /// assert_eq!(
    ///     SplitConfig::from_options("boxes=3"),
    ///     Err(Error::UnknownOption { key: "boxes".to_string() })
    /// );
    /// ```
    pub fn from_options(options: &str) -> Result<SplitConfig, Error> {
        let mut config = SplitConfig::default();

        for option in options.split(',').map(str::trim).filter(|o| !o.is_empty()) {
            let (key, value) = option.split_once('=').ok_or_else(|| Error::InvalidOptionValue {
                key: option.to_ascii_lowercase(),
                value: String::new(),
            })?;
            let (key, value) = (key.trim().to_ascii_lowercase(), value.trim());

            match key.as_str() {
                "k" => {
                    let k = value.parse::<i64>().map_err(|_| Error::InvalidOptionValue {
                        key: key.clone(),
                        value: value.to_string(),
                    })?;
                    config.k = SplitConfig::new(k)?.k;
                }
                "strategy" => {
                    config.strategy = match value.to_ascii_lowercase().as_str() {
                        "equisplit" => SplitStrategy::EquiSplit,
                        "fixed" => SplitStrategy::Fixed,
                        _ => {
                            return Err(Error::InvalidOptionValue {
                                key,
                                value: value.to_string(),
                            });
                        }
                    };
                }
                _ => return Err(Error::UnknownOption { key }),
            }
        }

        Ok(config.with_strategy(config.strategy))
    }

    /// 分割方法を設定する。[`SplitStrategy::Fixed`] の場合 `k` は
    /// [`EXTRACT_BOXES_FIXED`] に揃えられ、同じ挙動の設定は等しく比較される。
    fn with_strategy(mut self, strategy: SplitStrategy) -> SplitConfig {
        self.strategy = strategy;
        if strategy == SplitStrategy::Fixed {
            self.k = EXTRACT_BOXES_FIXED;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_equisplit_ten() {
        let config = SplitConfig::default();
        assert_eq!(config.strategy(), SplitStrategy::EquiSplit);
        assert_eq!(config.target_boxes(), 10);
        assert_eq!(SplitConfig::from_options("").unwrap(), config);
        assert_eq!(SplitConfig::from_options(" , ").unwrap(), config);
    }

    #[test]
    fn range_bounds() {
        assert!(SplitConfig::new(1).is_ok());
        assert!(SplitConfig::new(1000).is_ok());
        assert_eq!(SplitConfig::new(-3), Err(Error::ConfigOutOfRange { k: -3 }));
    }

    #[test]
    fn clamped_saturates() {
        assert_eq!(SplitConfig::clamped(-5).target_boxes(), 1);
        assert_eq!(SplitConfig::clamped(0).target_boxes(), 1);
        assert_eq!(SplitConfig::clamped(50).target_boxes(), 50);
        assert_eq!(SplitConfig::clamped(i64::MAX).target_boxes(), 1000);
    }

    #[test]
    fn fixed_ignores_k() {
        assert_eq!(SplitConfig::fixed().target_boxes(), 20);
        let config = SplitConfig::from_options("k=3, strategy=Fixed").unwrap();
        assert_eq!(config.target_boxes(), 20);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserialize_validates_k() {
        let config: SplitConfig = serde_json::from_str(r#"{"k": 30}"#).unwrap();
        assert_eq!(config, SplitConfig::new(30).unwrap());

        let config: SplitConfig = serde_json::from_str(r#"{"strategy": "fixed"}"#).unwrap();
        assert_eq!(config.strategy(), SplitStrategy::Fixed);

        assert!(serde_json::from_str::<SplitConfig>(r#"{"k": 0}"#).is_err());
    }

    #[test]
    fn fixed_configs_compare_equal() {
        let fixed = SplitConfig::fixed();
        assert_eq!(SplitConfig::from_options("strategy=fixed").unwrap(), fixed);
        assert_eq!(SplitConfig::from_options("strategy=fixed, k=3").unwrap(), fixed);
        assert_eq!(SplitConfig::from_options("k=3, strategy=fixed").unwrap(), fixed);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserialized_fixed_config_matches_constructor() {
        let config: SplitConfig =
            serde_json::from_str(r#"{"strategy": "fixed", "k": 7}"#).unwrap();
        assert_eq!(config, SplitConfig::fixed());
    }

    #[test]
    fn option_without_value_reports_lowercased_key() {
        assert_eq!(
            SplitConfig::from_options("K"),
            Err(Error::InvalidOptionValue {
                key: "k".to_string(),
                value: String::new()
            })
        );
    }

    #[test]
    fn option_errors() {
        assert_eq!(
            SplitConfig::from_options("k=abc"),
            Err(Error::InvalidOptionValue {
                key: "k".to_string(),
                value: "abc".to_string()
            })
        );
        assert_eq!(
            SplitConfig::from_options("k=0"),
            Err(Error::ConfigOutOfRange { k: 0 })
        );
        assert_eq!(
            SplitConfig::from_options("k"),
            Err(Error::InvalidOptionValue {
                key: "k".to_string(),
                value: String::new()
            })
        );
        assert_eq!(
            SplitConfig::from_options("strategy=random"),
            Err(Error::InvalidOptionValue {
                key: "strategy".to_string(),
                value: "random".to_string()
            })
        );
    }
}
