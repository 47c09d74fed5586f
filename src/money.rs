//! 금액 반올림과 입력값 정리(클램프) 유틸리티.
//!
//! 모든 계산 단계는 결과를 바로 반올림한 뒤 다음 단계에 넘긴다.
//! 반올림을 마지막으로 미루면 화면/내보내기 값과 센트 단위로 어긋난다.

/// 수량 입력의 상한.
pub const MAX_QUANTITY: f64 = 999_999.0;
/// 사용률/수수료 등 일반 백분율의 상한.
pub const MAX_PERCENT: f64 = 100.0;
/// 이익 마진(%)의 상한.
pub const MAX_MARGIN_PERCENT: f64 = 1000.0;

/// 소수점 `places` 자리로 반올림한다. 0.5는 +무한대 방향으로 올린다.
///
/// 비유한 값(NaN/Inf)은 0을 반환하고 -0.0은 0.0으로 정규화한다.
pub fn round_to(value: f64, places: i32) -> f64 {
    if !value.is_finite() {
        return 0.0;
    }
    let factor = 10f64.powi(places);
    let rounded = (value * factor + 0.5).floor() / factor;
    if rounded == 0.0 || !rounded.is_finite() {
        0.0
    } else {
        rounded
    }
}

/// 금액(2자리) 반올림.
pub fn round2(value: f64) -> f64 {
    round_to(value, 2)
}

/// 단가(ml당 가격 등) 3자리 반올림.
pub fn round3(value: f64) -> f64 {
    round_to(value, 3)
}

/// 분당 비용 6자리 반올림.
pub fn round6(value: f64) -> f64 {
    round_to(value, 6)
}

/// 음수/비유한 값을 0으로 바꾼다.
pub fn non_negative(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

/// 0..=max 범위로 클램프한다. 비유한 값은 0.
pub fn clamp_range(value: f64, max: f64) -> f64 {
    non_negative(value).min(max)
}

/// 0..=100 백분율.
pub fn percent(value: f64) -> f64 {
    clamp_range(value, MAX_PERCENT)
}

/// 0..=1000 마진 백분율.
pub fn margin_percent(value: f64) -> f64 {
    clamp_range(value, MAX_MARGIN_PERCENT)
}

/// 0..=999,999 수량.
pub fn quantity(value: f64) -> f64 {
    clamp_range(value, MAX_QUANTITY)
}

/// 분모로 쓰일 수량. 0 이하(또는 1 미만의 근사 0)는 1로 대체한다.
pub fn divisor(value: f64) -> f64 {
    let q = quantity(value);
    if q < 1.0 {
        1.0
    } else {
        q
    }
}
