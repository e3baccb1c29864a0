//! Frontend Models
//!
//! Static tables behind the navigation hub and the dummy records page.

/// One entry of a navigation list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrototypeLink {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub href: &'static str,
}

/// Prototype index entries
pub const PROTOTYPE_LINKS: &[PrototypeLink] = &[PrototypeLink {
    id: "heatstroke-check",
    title: "熱中症チェックシステム",
    description: "建設現場向けの熱中症対策チェック記録と運用管理を行うプロトタイプ",
    href: "/heatstroke_check",
}];

/// Pages reachable from the heatstroke check home
pub const HEATSTROKE_PAGES: &[PrototypeLink] = &[
    PrototypeLink {
        id: "setting",
        title: "熱中症チェック項目設定/QRコード印刷",
        description: "チェック項目の設定と現場掲示用QRコードの印刷を行うページ",
        href: "/heatstroke_check/check-item-settings",
    },
    PrototypeLink {
        id: "record",
        title: "熱中症チェック記録",
        description: "職長や職人のチェック記録を入力・確認するページ",
        href: "/heatstroke_check/check-records",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordStatus {
    Recorded,
    NotRecorded,
}

impl RecordStatus {
    pub fn label(&self) -> &'static str {
        match self {
            RecordStatus::Recorded => "記録済み",
            RecordStatus::NotRecorded => "未記録",
        }
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            RecordStatus::Recorded => "status-badge recorded",
            RecordStatus::NotRecorded => "status-badge missing",
        }
    }
}

/// Row of the dummy records table (no backing store)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckRecord {
    pub company: &'static str,
    pub user: &'static str,
    pub date: &'static str,
    pub status: RecordStatus,
}

pub const DUMMY_RECORDS: &[CheckRecord] = &[
    CheckRecord {
        company: "A設備工業",
        user: "山田 太郎（職長）",
        date: "2026-02-15",
        status: RecordStatus::Recorded,
    },
    CheckRecord {
        company: "B建設",
        user: "佐藤 花子（職人）",
        date: "2026-02-15",
        status: RecordStatus::Recorded,
    },
    CheckRecord {
        company: "C電工",
        user: "鈴木 一郎（職長）",
        date: "2026-02-15",
        status: RecordStatus::NotRecorded,
    },
];
