//! 表单状态管理模块
//!
//! 将零散的 signal 整合为 `FormState` 结构体，负责：
//! - 数据的持有与回填
//! - 数据到请求对象的转换（经由纯数据的 `LessonDraft` 校验）

use leptos::prelude::*;
use lessonbook::shared::{Lesson, LessonDate, LessonInput, LessonStatus};

/// 表单原始文本，校验后转为 `LessonInput`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LessonDraft {
    pub teacher_name: String,
    pub subject: String,
    pub class_name: String,
    pub topic: String,
    pub evidence: String,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub status: LessonStatus,
    pub note: String,
}

impl LessonDraft {
    pub fn validate(&self) -> Result<LessonInput, String> {
        let required = [
            ("Teacher", &self.teacher_name),
            ("Subject", &self.subject),
            ("Class", &self.class_name),
            ("Topic", &self.topic),
            ("Start time", &self.start_time),
            ("End time", &self.end_time),
        ];
        if let Some((label, _)) = required.iter().find(|(_, v)| v.trim().is_empty()) {
            return Err(format!("{} is required", label));
        }

        let date = LessonDate::parse(&self.date).ok_or_else(|| "Date is invalid".to_string())?;

        // HH:MM 字符串可以直接按字典序比较
        if self.end_time.trim() <= self.start_time.trim() {
            return Err("End time must be after start time".to_string());
        }

        let optional = |s: &str| {
            let s = s.trim();
            (!s.is_empty()).then(|| s.to_string())
        };

        Ok(LessonInput {
            teacher_name: self.teacher_name.trim().to_string(),
            subject: self.subject.trim().to_string(),
            class_name: self.class_name.trim().to_string(),
            topic: self.topic.trim().to_string(),
            evidence: optional(&self.evidence),
            date,
            start_time: self.start_time.trim().to_string(),
            end_time: self.end_time.trim().to_string(),
            status: self.status,
            note: optional(&self.note),
        })
    }
}

/// 表单状态结构体
///
/// 使用 `RwSignal` 因为它实现了 `Copy` trait，非常适合在闭包间传递。
#[derive(Clone, Copy)]
pub struct FormState {
    pub teacher_name: RwSignal<String>,
    pub subject: RwSignal<String>,
    pub class_name: RwSignal<String>,
    pub topic: RwSignal<String>,
    pub evidence: RwSignal<String>,
    pub date: RwSignal<String>,
    pub start_time: RwSignal<String>,
    pub end_time: RwSignal<String>,
    pub status: RwSignal<LessonStatus>,
    pub note: RwSignal<String>,
}

impl FormState {
    pub fn new() -> Self {
        Self {
            teacher_name: RwSignal::new(String::new()),
            subject: RwSignal::new(String::new()),
            class_name: RwSignal::new(String::new()),
            topic: RwSignal::new(String::new()),
            evidence: RwSignal::new(String::new()),
            date: RwSignal::new(String::new()),
            start_time: RwSignal::new(String::new()),
            end_time: RwSignal::new(String::new()),
            status: RwSignal::new(LessonStatus::default()),
            note: RwSignal::new(String::new()),
        }
    }

    /// 编辑时用已有记录回填
    pub fn fill(&self, lesson: &Lesson) {
        self.teacher_name.set(lesson.teacher_name.clone());
        self.subject.set(lesson.subject.clone());
        self.class_name.set(lesson.class_name.clone());
        self.topic.set(lesson.topic.clone());
        self.evidence.set(lesson.evidence.clone());
        self.date.set(lesson.date.to_string());
        self.start_time.set(lesson.start_time.clone());
        self.end_time.set(lesson.end_time.clone());
        self.status.set(lesson.status);
        self.note.set(lesson.note.clone());
    }

    pub fn draft(&self) -> LessonDraft {
        LessonDraft {
            teacher_name: self.teacher_name.get_untracked(),
            subject: self.subject.get_untracked(),
            class_name: self.class_name.get_untracked(),
            topic: self.topic.get_untracked(),
            evidence: self.evidence.get_untracked(),
            date: self.date.get_untracked(),
            start_time: self.start_time.get_untracked(),
            end_time: self.end_time.get_untracked(),
            status: self.status.get_untracked(),
            note: self.note.get_untracked(),
        }
    }
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> LessonDraft {
        LessonDraft {
            teacher_name: " Nia ".into(),
            subject: "Matematika".into(),
            class_name: "7A".into(),
            topic: "Pecahan".into(),
            evidence: "   ".into(),
            date: "2024-05-01".into(),
            start_time: "07:30".into(),
            end_time: "09:00".into(),
            status: LessonStatus::Completed,
            note: "Lancar".into(),
        }
    }

    #[test]
    fn valid_draft_trims_and_drops_blank_optionals() {
        let input = filled().validate().unwrap();
        assert_eq!(input.teacher_name, "Nia");
        assert_eq!(input.evidence, None);
        assert_eq!(input.note.as_deref(), Some("Lancar"));
        assert_eq!(input.date.to_string(), "2024-05-01");
    }

    #[test]
    fn missing_required_field_is_reported() {
        let draft = LessonDraft {
            subject: String::new(),
            ..filled()
        };
        assert_eq!(draft.validate().unwrap_err(), "Subject is required");
    }

    #[test]
    fn rejects_bad_date_and_inverted_times() {
        let bad_date = LessonDraft {
            date: "01/05/2024".into(),
            ..filled()
        };
        assert_eq!(bad_date.validate().unwrap_err(), "Date is invalid");

        let inverted = LessonDraft {
            end_time: "07:00".into(),
            ..filled()
        };
        assert!(inverted.validate().is_err());
    }
}
