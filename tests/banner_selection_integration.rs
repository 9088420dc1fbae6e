//! Integration tests for banner selection
//!
//! Drives BannerService through the public API with the in-memory
//! repository and stock PromoBanner records.

use banner_selector::{
    Banner, BannerError, BannerRepository, BannerService, EvaluationContext,
    InMemoryBannerRepository, PromoBanner,
};
use chrono::{DateTime, Duration, SecondsFormat, Utc};
use std::sync::Arc;

fn at(now: DateTime<Utc>, hours: i64) -> String {
    (now + Duration::hours(hours)).to_rfc3339_opts(SecondsFormat::Nanos, true)
}

fn promo(id: &str, now: DateTime<Utc>, start_h: i64, exp_h: i64) -> Arc<PromoBanner> {
    Arc::new(PromoBanner::new(
        id,
        format!("{} content", id),
        at(now, start_h),
        at(now, exp_h),
    ))
}

/// Expired banner plus a future one; an internal caller previews the future one.
#[tokio::test]
async fn test_internal_caller_previews_future_banner() {
    let now = Utc::now();
    let past = promo("past", now, -2, -1);
    let upcoming = promo("upcoming", now, 1, 2);
    let repo = Arc::new(InMemoryBannerRepository::with_banners(vec![
        past.clone(),
        upcoming.clone(),
    ]));
    let service = BannerService::new(repo);
    let ctx = EvaluationContext::with_client_ip("10.0.255.1");

    let valid = service.list_valid_banners_at(&ctx, now).await.unwrap();
    assert_eq!(valid.len(), 1);
    assert_eq!(valid[0].start(), upcoming.start());

    let displayed = service.display_appropriate_banner_at(&ctx, now).await.unwrap();
    assert!(displayed);
    assert_eq!(upcoming.display_count(), 1);
    assert_eq!(past.display_count(), 0);
}

/// The same store seen from a public address shows nothing.
#[tokio::test]
async fn test_public_caller_sees_nothing_before_launch() {
    let now = Utc::now();
    let upcoming = promo("upcoming", now, 1, 2);
    let repo = Arc::new(InMemoryBannerRepository::with_banners(vec![
        promo("past", now, -2, -1),
        upcoming.clone(),
    ]));
    let service = BannerService::new(repo);

    for ctx in [
        EvaluationContext::new(),
        EvaluationContext::with_client_ip("1.1.1.1"),
        EvaluationContext::with_client_ip("::ffff:10.0.0.1"),
    ] {
        let displayed = service.display_appropriate_banner_at(&ctx, now).await.unwrap();
        assert!(!displayed, "Nothing should display for {:?}", ctx);
    }
    assert_eq!(upcoming.display_count(), 0);
}

/// Two live banners: only the one expiring first is displayed.
#[tokio::test]
async fn test_displays_exactly_one_banner() {
    let now = Utc::now();
    let later = promo("later", now, -1, 2);
    let sooner = promo("sooner", now, -1, 1);
    let service = BannerService::new(Arc::new(InMemoryBannerRepository::with_banners(vec![
        later.clone(),
        sooner.clone(),
    ])));

    assert!(service
        .display_appropriate_banner_at(&EvaluationContext::new(), now)
        .await
        .unwrap());

    assert_eq!(sooner.display_count(), 1);
    assert_eq!(later.display_count(), 0);
}

/// One-time banners retire after display and the next one takes over.
#[tokio::test]
async fn test_one_time_banner_rotation() {
    let now = Utc::now();
    let flash = Arc::new(
        PromoBanner::new("flash", "flash sale", at(now, -1), at(now, 1)).one_time(),
    );
    let regular = promo("regular", now, -1, 5);
    let service = BannerService::new(Arc::new(InMemoryBannerRepository::with_banners(vec![
        flash.clone(),
        regular.clone(),
    ])));
    let ctx = EvaluationContext::new();

    assert!(service.display_appropriate_banner_at(&ctx, now).await.unwrap());
    assert!(flash.is_expired());

    assert!(service.display_appropriate_banner_at(&ctx, now).await.unwrap());
    assert_eq!(flash.display_count(), 1);
    assert_eq!(regular.display_count(), 1);

    let valid = service.list_valid_banners_at(&ctx, now).await.unwrap();
    assert_eq!(valid.len(), 1);
}

/// A display failure is surfaced and no other banner is tried.
#[tokio::test]
async fn test_display_failure_surfaces_error() {
    let now = Utc::now();
    let broken = Arc::new(PromoBanner::new("broken", "", at(now, -1), at(now, 1)));
    let fallback = promo("fallback", now, -1, 2);
    let service = BannerService::new(Arc::new(InMemoryBannerRepository::with_banners(vec![
        fallback.clone(),
        broken.clone(),
    ])));

    let err = service
        .display_appropriate_banner_at(&EvaluationContext::new(), now)
        .await
        .unwrap_err();

    assert_eq!(
        err,
        BannerError::Display("banner broken has no content".to_string())
    );
    assert_eq!(fallback.display_count(), 0);
}

/// Malformed timestamps are accepted on write and ignored on read.
#[tokio::test]
async fn test_malformed_banner_is_stored_but_never_valid() {
    let now = Utc::now();
    let repo = Arc::new(InMemoryBannerRepository::new());
    let service = BannerService::new(repo.clone());

    service
        .add_banner(Arc::new(PromoBanner::new(
            "bad",
            "oops",
            "last tuesday",
            at(now, 1),
        )))
        .await
        .unwrap();
    service
        .add_banner(promo("good", now, -1, 1))
        .await
        .unwrap();

    assert_eq!(repo.get_banners().await.unwrap().len(), 2);

    let internal = EvaluationContext::with_client_ip("10.0.0.0");
    let valid = service.list_valid_banners_at(&internal, now).await.unwrap();
    assert_eq!(valid.len(), 1);
    assert_eq!(valid[0].expiration(), at(now, 1));
    assert_eq!(valid[0].start(), at(now, -1));
}

/// Banners loaded from JSON records behave like constructed ones.
#[tokio::test]
async fn test_banners_from_json_records() {
    let records = r#"[
        {"id": "old", "content": "a", "start": "2000-01-01T00:00:00Z", "expiration": "2000-02-01T00:00:00Z"},
        {"id": "far", "content": "b", "start": "2000-01-01T00:00:00Z", "expiration": "2999-01-01T00:00:00Z"},
        {"id": "near", "content": "c", "start": "2000-01-01T00:00:00+02:00", "expiration": "2998-12-31T23:00:00-02:00"},
        {"id": "gone", "content": "d", "start": "2000-01-01T00:00:00Z", "expiration": "2100-01-01T00:00:00Z", "expired": true}
    ]"#;
    let parsed: Vec<PromoBanner> = serde_json::from_str(records).unwrap();
    let banners: Vec<Arc<PromoBanner>> = parsed.into_iter().map(Arc::new).collect();
    let service = BannerService::new(Arc::new(InMemoryBannerRepository::with_banners(
        banners.iter().map(|b| b.clone() as Arc<dyn Banner>).collect(),
    )));

    let valid = service
        .list_valid_banners(&EvaluationContext::new())
        .await
        .unwrap();
    assert_eq!(valid.len(), 2);

    assert!(service
        .display_appropriate_banner(&EvaluationContext::new())
        .await
        .unwrap());
    // 2998-12-31T23:00-02:00 is 2999-01-01T01:00Z, after "far"
    assert_eq!(banners[1].display_count(), 1);
    assert_eq!(banners[2].display_count(), 0);
}
