//! # 登录选项构建
//!
//! 在启动时根据客户端注册构建一次，之后只读共享

use serde::{Serialize, Serializer};
use std::ops::Deref;
use std::sync::Arc;

use crate::config::ClientRegistration;

/// 授权发起路径片段，拼接在客户端基础地址之后
pub const AUTHORIZATION_PATH: &str = "/oauth2/authorization/";

/// 单个登录选项
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginOption {
    /// 展示名称（提供商标识）
    pub label: String,
    /// 发起授权的 URI
    pub login_uri: String,
}

impl LoginOption {
    /// 由注册键和注册信息构建登录选项
    #[must_use]
    pub fn from_registration(
        client_uri: &str,
        registration_key: &str,
        registration: &ClientRegistration,
    ) -> Self {
        Self {
            label: registration.provider.clone(),
            login_uri: format!("{client_uri}{AUTHORIZATION_PATH}{registration_key}"),
        }
    }
}

/// 不可变的有序登录选项列表
///
/// 克隆只增加引用计数，可直接放入 axum 状态中按请求复制。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginOptions(Arc<[LoginOption]>);

impl LoginOptions {
    /// 选项数量
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// 是否为空
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Deref for LoginOptions {
    type Target = [LoginOption];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Vec<LoginOption>> for LoginOptions {
    fn from(options: Vec<LoginOption>) -> Self {
        Self(options.into())
    }
}

impl FromIterator<LoginOption> for LoginOptions {
    fn from_iter<I: IntoIterator<Item = LoginOption>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Serialize for LoginOptions {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.as_ref().serialize(serializer)
    }
}

/// 构建登录选项列表
///
/// 只保留 `authorization_grant_type` 精确等于 `authorization_code` 的注册，
/// 保持输入的遍历顺序。`login_uri` 为 `client_uri`、固定路径与注册键的直接拼接，
/// 不做任何转义或斜杠归一化。
pub fn build_login_options<'a, K, I>(registrations: I, client_uri: &str) -> LoginOptions
where
    K: AsRef<str> + 'a,
    I: IntoIterator<Item = (&'a K, &'a ClientRegistration)>,
{
    registrations
        .into_iter()
        .filter(|(_, registration)| registration.is_authorization_code())
        .map(|(key, registration)| {
            LoginOption::from_registration(client_uri, key.as_ref(), registration)
        })
        .collect()
}
