use once_cell::sync::Lazy;
use regex::Regex;

static NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\p{L}][\p{L} '\-]*$").expect("Invalid name regex"));

static COLOR_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([A-Za-z]+|#[0-9A-Fa-f]{6})$").expect("Invalid color regex")
});

pub fn validate_name(name: &str) -> Result<(), &'static str> {
    // 名称长度校验：1 <= x <= 50
    let trimmed = name.trim();
    if trimmed.is_empty() || trimmed.chars().count() > 50 {
        return Err("Name length must be between 1 and 50 characters");
    }
    // 名称格式校验：字母开头，只能包含字母、空格、撇号或连字符
    if !NAME_RE.is_match(trimmed) {
        return Err("Name must contain only letters, spaces, apostrophes or hyphens");
    }
    Ok(())
}

pub fn validate_color(color: &str) -> Result<(), &'static str> {
    // 颜色格式校验：颜色单词或 #RRGGBB
    if !COLOR_RE.is_match(color.trim()) {
        return Err("Color must be a color word or a #RRGGBB value");
    }
    Ok(())
}

pub fn validate_age(age: i32) -> Result<(), &'static str> {
    if !(1..=150).contains(&age) {
        return Err("Age must be between 1 and 150");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_names() {
        assert!(validate_name("Harry Potter").is_ok());
        assert!(validate_name("Grindel-Wald").is_ok());
        assert!(validate_name("O'Brien").is_ok());
    }

    #[test]
    fn test_invalid_names() {
        assert!(validate_name("").is_err());
        assert!(validate_name("   ").is_err());
        assert!(validate_name("1337").is_err());
        assert!(validate_name(&"x".repeat(51)).is_err());
    }

    #[test]
    fn test_valid_colors() {
        assert!(validate_color("red").is_ok());
        assert!(validate_color("Scarlet").is_ok());
        assert!(validate_color("#AABBCC").is_ok());
    }

    #[test]
    fn test_invalid_colors() {
        assert!(validate_color("").is_err());
        assert!(validate_color("#12345").is_err());
        assert!(validate_color("dark red!").is_err());
    }

    #[test]
    fn test_age_bounds() {
        assert!(validate_age(11).is_ok());
        assert!(validate_age(0).is_err());
        assert!(validate_age(-3).is_err());
        assert!(validate_age(151).is_err());
    }
}
