use indexmap::IndexMap;

use crate::dataframe::DataFrame;
use crate::error::Result;
use crate::value::ColumnKey;

/// DataFrameのグループ化機能
///
/// 行は列の値の文字列表現でグループ化される。グループの順序は
/// 各値が最初に現れた順序、グループ内の行は元の行順序を保つ。
#[derive(Debug)]
pub struct DataFrameGroupBy<'a> {
    /// グループ化された行位置
    groups: IndexMap<String, Vec<usize>>,

    /// 元のDataFrame
    source: &'a DataFrame,

    /// グループ化に使用した列
    by: ColumnKey,
}

impl<'a> DataFrameGroupBy<'a> {
    /// 新しいDataFrameグループを作成
    ///
    /// # Errors
    /// `by` が存在しない列の場合は `ColumnNotFound`
    pub fn new<K: Into<ColumnKey>>(source: &'a DataFrame, by: K) -> Result<Self> {
        let by = by.into();
        let values = source.column_values(&by)?;

        let mut groups: IndexMap<String, Vec<usize>> = IndexMap::new();
        for (i, value) in values.iter().enumerate() {
            groups.entry(value.key_string()).or_default().push(i);
        }
        log::debug!("grouped {} rows into {} groups", values.len(), groups.len());

        Ok(DataFrameGroupBy { groups, source, by })
    }

    /// グループ化に使用した列
    pub fn by(&self) -> &ColumnKey {
        &self.by
    }

    /// グループ数を取得
    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    /// グループキーを出現順で取得
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.groups.keys().map(String::as_str)
    }

    /// 各グループのサイズを返す
    pub fn size(&self) -> IndexMap<String, usize> {
        self.groups
            .iter()
            .map(|(k, rows)| (k.clone(), rows.len()))
            .collect()
    }

    /// 指定キーのグループをDataFrameとして取得
    pub fn get_group(&self, key: &str) -> Result<Option<DataFrame>> {
        self.groups
            .get(key)
            .map(|positions| self.source.take(positions))
            .transpose()
    }

    /// 全グループをDataFrameに変換
    pub fn into_frames(self) -> Result<IndexMap<String, DataFrame>> {
        let source = self.source;
        self.groups
            .into_iter()
            .map(|(key, positions)| source.take(&positions).map(|frame| (key, frame)))
            .collect()
    }
}

impl DataFrame {
    /// 列の値の文字列表現で行を分割する
    ///
    /// グループは最初に現れた順序で並び、元の行順序とインデックスラベルを保つ。
    pub fn group_by<K: Into<ColumnKey>>(&self, column: K) -> Result<IndexMap<String, DataFrame>> {
        DataFrameGroupBy::new(self, column)?.into_frames()
    }
}
