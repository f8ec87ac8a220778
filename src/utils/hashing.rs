use md5::{Digest, Md5};

/// 生成文本的MD5哈希（十六进制）
pub fn md5_hex(text: &str) -> String {
    let mut hasher = Md5::new();
    hasher.update(text.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// 截取MD5哈希的前`len`位作为短标识
pub fn short_digest(text: &str, len: usize) -> String {
    let mut digest = md5_hex(text);
    digest.truncate(len);
    digest
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_md5_hex_known_value() {
        assert_eq!(md5_hex("hello"), "5d41402abc4b2a76b9719d911017c592");
    }

    #[test]
    fn test_short_digest_is_prefix() {
        let digest = short_digest("hello", 8);
        assert_eq!(digest, "5d41402a");
        assert!(md5_hex("hello").starts_with(&digest));
    }
}
