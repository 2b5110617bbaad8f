//! LocalStorage 封装模块
//!
//! 使用 `web_sys::Storage` 实现核心库的 `CredentialStore`。
//! 只有会话持有者会通过它读写凭据槽位。

use lessonbook::CredentialStore;

/// 浏览器 LocalStorage
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

impl LocalStorage {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

impl CredentialStore for LocalStorage {
    /// 键不存在或 Storage 不可用时返回 `None`
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok()?
    }

    /// 隐私模式下写入可能失败
    fn set(&self, key: &str, value: &str) -> bool {
        Self::storage()
            .and_then(|s| s.set_item(key, value).ok())
            .is_some()
    }

    fn delete(&self, key: &str) -> bool {
        Self::storage()
            .and_then(|s| s.remove_item(key).ok())
            .is_some()
    }
}
