// src/components/stack.rs

// serde を使うためにインポート！JS から届く操作 (JSON) をこの型に戻すよ。
use serde::{Deserialize, Serialize};

/// カードが置かれる場所の種類を示す Enum だよ。
/// 移動先 (ドロップ先) の指定に使うよ。
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StackType {
    /// 場札 (Tableau) だよ。7つの列があるので、列番号 (0-6) を持つ。
    Tableau(u8),
    /// 組札 (Foundation) だよ。スートごとに4つある。
    /// 0: Club, 1: Diamond, 2: Heart, 3: Spade の順番！
    Foundation(u8),
    /// 山札 (Stock) だよ。ここへの移動はルール上できない。
    Stock,
    /// 山札からめくったカードを置く場所 (Waste) だよ。ここへの移動もできない。
    Waste,
}

/// プレイヤーが掴んだカード (移動元) を表す Enum だよ。
///
/// 捨て札なら「どのスロットか」、場札なら「どの列の何枚目から上か」を持つ。
/// `offset` は列の一番下 (裏向きカードも含む) から数えた位置だよ。
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CardSelection {
    Waste { slot: usize },
    Tableau { column: usize, offset: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stack_type_json_shape() {
        assert_eq!(serde_json::to_string(&StackType::Tableau(2)).unwrap(), r#"{"Tableau":2}"#);
        assert_eq!(serde_json::to_string(&StackType::Stock).unwrap(), r#""Stock""#);

        let parsed: StackType = serde_json::from_str(r#"{"Foundation":3}"#).unwrap();
        assert_eq!(parsed, StackType::Foundation(3));
    }

    #[test]
    fn card_selection_json_shape() {
        let selection = CardSelection::Tableau { column: 4, offset: 2 };
        let json = serde_json::to_string(&selection).unwrap();
        assert_eq!(json, r#"{"Tableau":{"column":4,"offset":2}}"#);

        let parsed: CardSelection = serde_json::from_str(r#"{"Waste":{"slot":1}}"#).unwrap();
        assert_eq!(parsed, CardSelection::Waste { slot: 1 });
    }
}
