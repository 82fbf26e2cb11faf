use std::collections::HashMap;
use std::fmt::{self, Display};
use std::ops::Range;

use serde::{Deserialize, Serialize};

/// 行ラベル（数値または文字列）
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IndexLabel {
    Number(i64),
    Label(String),
}

impl Display for IndexLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndexLabel::Number(n) => write!(f, "{}", n),
            IndexLabel::Label(s) => write!(f, "{}", s),
        }
    }
}

impl From<i64> for IndexLabel {
    fn from(n: i64) -> Self {
        IndexLabel::Number(n)
    }
}

impl From<i32> for IndexLabel {
    fn from(n: i32) -> Self {
        IndexLabel::Number(i64::from(n))
    }
}

impl From<usize> for IndexLabel {
    fn from(n: usize) -> Self {
        // 行数が i64 を超えることはない
        IndexLabel::Number(n as i64)
    }
}

impl From<&str> for IndexLabel {
    fn from(s: &str) -> Self {
        IndexLabel::Label(s.to_string())
    }
}

impl From<String> for IndexLabel {
    fn from(s: String) -> Self {
        IndexLabel::Label(s)
    }
}

/// インデックス構造体
///
/// DataFrameの行ラベルを表現する。ラベルは一意である必要はない。
#[derive(Debug, Clone, Default)]
pub struct Index {
    /// インデックス値
    values: Vec<IndexLabel>,

    /// 値から最初の出現位置へのマッピング
    map: HashMap<IndexLabel, usize>,
}

impl Index {
    /// 新しいインデックスを作成
    pub fn new(values: Vec<IndexLabel>) -> Self {
        let mut map = HashMap::with_capacity(values.len());
        for (i, value) in values.iter().enumerate() {
            map.entry(value.clone()).or_insert(i);
        }
        Index { values, map }
    }

    /// 整数範囲からインデックスを作成
    pub fn from_range(range: Range<usize>) -> Self {
        Self::new(range.map(IndexLabel::from).collect())
    }

    /// インデックス長を取得
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// インデックスが空かどうか
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// 値から位置を取得（重複時は最初の位置）
    pub fn get_loc(&self, key: &IndexLabel) -> Option<usize> {
        self.map.get(key).copied()
    }

    /// 位置から値を取得
    pub fn get_value(&self, pos: usize) -> Option<&IndexLabel> {
        self.values.get(pos)
    }

    /// 全ての値を取得
    pub fn values(&self) -> &[IndexLabel] {
        &self.values
    }

    /// 指定位置のラベルだけを持つ新しいインデックス
    pub fn take(&self, positions: &[usize]) -> Self {
        Self::new(
            positions
                .iter()
                .filter_map(|&pos| self.values.get(pos).cloned())
                .collect(),
        )
    }
}

impl PartialEq for Index {
    fn eq(&self, other: &Self) -> bool {
        self.values == other.values
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_labels_resolve_to_first() {
        let index = Index::new(vec!["a".into(), "b".into(), "a".into()]);
        assert_eq!(index.len(), 3);
        assert_eq!(index.get_loc(&"a".into()), Some(0));
        assert_eq!(index.get_loc(&"b".into()), Some(1));
        assert_eq!(index.get_loc(&"z".into()), None);
    }

    #[test]
    fn test_take() {
        let index = Index::from_range(0..5);
        let taken = index.take(&[1, 3]);
        assert_eq!(taken.values(), &[IndexLabel::Number(1), IndexLabel::Number(3)]);
        assert_eq!(taken.get_loc(&IndexLabel::Number(3)), Some(1));
    }
}
