//! JWT 签发与校验
//!
//! 签名密钥在启动时从配置构造一次（`Jwt::new`），之后克隆进认证中间件
//! 和 auth 服务，运行期不读任何全局状态。

use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use crate::config::JwtConfig;

// JWT Claims 结构体
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Claims {
    pub sub: String, // Subject (user ID)
    pub exp: usize,  // Expiration time (时间戳)
    pub iat: usize,  // Issued at (签发时间)
}

/// 校验失败的两种情况，对应不同的 401 文案
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenError {
    /// 签名有效但已过期
    Expired,
    /// 签名不匹配、格式损坏等其他一切情况
    Malformed,
}

#[derive(Clone)]
pub struct Jwt {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    expiry: chrono::Duration,
}

impl Jwt {
    pub fn new(config: &JwtConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.secret.as_ref()),
            decoding_key: DecodingKey::from_secret(config.secret.as_ref()),
            expiry: chrono::Duration::days(config.token_expiry_days),
        }
    }

    // 签发 token，有效期取配置（默认 7 天）
    pub fn issue(&self, user_id: i64) -> Result<String, jsonwebtoken::errors::Error> {
        self.issue_with_expiry(user_id, self.expiry)
    }

    // 生成带自定义过期时间的 token
    pub fn issue_with_expiry(
        &self,
        user_id: i64,
        expiry_duration: chrono::Duration,
    ) -> Result<String, jsonwebtoken::errors::Error> {
        let now = chrono::Utc::now();
        let expiration = now + expiry_duration;

        let claims = Claims {
            sub: user_id.to_string(),
            exp: expiration.timestamp() as usize,
            iat: now.timestamp() as usize,
        };

        encode(&Header::default(), &claims, &self.encoding_key)
    }

    // 校验 token，过期与其他非法情况分开返回
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        decode::<Claims>(token, &self.decoding_key, &Validation::default())
            .map(|token_data| token_data.claims)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => TokenError::Expired,
                _ => TokenError::Malformed,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_jwt() -> Jwt {
        Jwt::new(&JwtConfig {
            secret: "unit-test-secret".to_string(),
            token_expiry_days: 7,
        })
    }

    #[test]
    fn test_issue_then_verify() {
        let jwt = test_jwt();
        let token = jwt.issue(42).unwrap();
        let claims = jwt.verify(&token).unwrap();
        assert_eq!(claims.sub, "42");
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_expired_token_is_distinguished() {
        let jwt = test_jwt();
        let token = jwt
            .issue_with_expiry(42, chrono::Duration::days(-1))
            .unwrap();
        assert_eq!(jwt.verify(&token), Err(TokenError::Expired));
    }

    #[test]
    fn test_garbage_token_is_malformed() {
        let jwt = test_jwt();
        assert_eq!(jwt.verify("not.a.jwt"), Err(TokenError::Malformed));
        assert_eq!(jwt.verify(""), Err(TokenError::Malformed));
    }

    #[test]
    fn test_wrong_secret_is_malformed() {
        let jwt = test_jwt();
        let other = Jwt::new(&JwtConfig {
            secret: "a-different-secret".to_string(),
            token_expiry_days: 7,
        });
        let token = jwt.issue(42).unwrap();
        assert_eq!(other.verify(&token), Err(TokenError::Malformed));
    }
}
