// src/config/rules.rs
//! ゲームのルールに関する定数と設定を定義するよ！
//! 場札の列数、捨て札のスロット数、空き列に置けるカードの決まりなど。

use serde::{Deserialize, Serialize};

pub const TABLEAU_SIZE: usize = 7; // 場札 (Tableau) の列数
pub const WASTE_SIZE: usize = 3; // 捨て札 (Waste) のスロット数 (一度にめくる枚数)
pub const FOUNDATION_SIZE: usize = 4; // 組札 (Foundation) の数 (スートごとに1つ)
pub const DECK_SIZE: usize = 52; // 標準デッキの枚数

/// 空になった場札の列に、どのカードを置けるかの決まりだよ。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum EmptyColumnRule {
    /// どのカードでも置ける (ゆるめのクロンダイク)。
    #[default]
    AnyCard,
    /// King だけ置ける (昔ながらのクロンダイク)。
    KingOnly,
}

/// 1ゲーム分の設定。JS からは JSON で渡ってくるよ。
///
/// 項目が欠けていてもデフォルト値で埋めるので、`{}` でも OK！
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub empty_column_rule: EmptyColumnRule,
    /// シャッフルのシード。`Some` なら同じ配りを再現できる。`None` なら毎回ランダム。
    pub seed: Option<u64>,
}

impl GameConfig {
    pub fn with_seed(seed: u64) -> Self {
        Self { seed: Some(seed), ..Self::default() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = GameConfig::default();
        assert_eq!(config.empty_column_rule, EmptyColumnRule::AnyCard);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn config_from_partial_json() {
        let config: GameConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, GameConfig::default());

        let config: GameConfig =
            serde_json::from_str(r#"{"empty_column_rule":"KingOnly","seed":42}"#).unwrap();
        assert_eq!(config.empty_column_rule, EmptyColumnRule::KingOnly);
        assert_eq!(config.seed, Some(42));
    }
}
