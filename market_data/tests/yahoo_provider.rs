use market_data::{
    LoadErrorReason, load,
    models::{interval::IntervalClass, request_params::BarsRequest},
    providers::{DataProvider, NewsProvider, ProviderError, yahoo::YahooProvider},
};
use mockito::{Matcher, Server};

const CHART_OK: &str = r#"{
  "chart": {
    "result": [{
      "meta": {"symbol": "MSFT", "currency": "USD", "exchangeName": "NMS", "fullExchangeName": "NasdaqGS"},
      "timestamp": [1704292200, 1704205800, 1704378600],
      "indicators": {"quote": [{
        "open":   [371.01, 373.86, null],
        "high":   [373.26, 375.90, 372.50],
        "low":    [369.50, 366.77, 368.10],
        "close":  [370.60, 370.87, 371.00],
        "volume": [23083500, 25258600, 20000000]
      }]}
    }],
    "error": null
  }
}"#;

const CHART_NOT_FOUND: &str =
    r#"{"chart":{"result":null,"error":{"code":"Not Found","description":"No data found, symbol may be delisted"}}}"#;

fn provider(server: &Server) -> YahooProvider {
    YahooProvider::new(&server.url(), "test-agent").unwrap()
}

#[tokio::test]
async fn fetches_and_normalizes_chart() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/v8/finance/chart/MSFT")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("range".into(), "6mo".into()),
            Matcher::UrlEncoded("interval".into(), "1wk".into()),
        ]))
        .match_header("user-agent", "test-agent")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(CHART_OK)
        .create_async()
        .await;

    let series = load(&provider(&server), "msft", IntervalClass::Weekly)
        .await
        .unwrap();
    mock.assert_async().await;

    // third sample has a null open and is dropped; the other two are re-sorted
    assert_eq!(series.len(), 2);
    assert_eq!(series.closes(), vec![370.87, 370.60]);
    assert_eq!(series.exchange(), Some("NasdaqGS"));
    assert_eq!(series.bars()[0].volume, 25_258_600);
}

const CHART_NSE_MONTHLY: &str = r#"{
  "chart": {
    "result": [{
      "meta": {"symbol": "RELIANCE.NS", "currency": "INR", "exchangeName": "NSI",
               "fullExchangeName": "NSE", "exchangeTimezoneName": "Asia/Kolkata", "gmtoffset": 19800},
      "timestamp": [1701369000, 1704047400],
      "indicators": {"quote": [{
        "open":   [2390.0, 2580.0],
        "high":   [2600.0, 2700.0],
        "low":    [2380.0, 2560.0],
        "close":  [2585.5, 2650.25],
        "volume": [180000000, 150000000]
      }]}
    }],
    "error": null
  }
}"#;

#[tokio::test]
async fn monthly_bars_are_dated_on_the_exchange_calendar() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/v8/finance/chart/RELIANCE.NS")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("range".into(), "1y".into()),
            Matcher::UrlEncoded("interval".into(), "1mo".into()),
        ]))
        .with_status(200)
        .with_body(CHART_NSE_MONTHLY)
        .create_async()
        .await;

    let series = load(&provider(&server), "reliance.ns", IntervalClass::Monthly)
        .await
        .unwrap();
    mock.assert_async().await;

    assert_eq!(series.timezone().to_string(), "Asia/Kolkata");
    let dates: Vec<String> = series
        .newest_first()
        .into_iter()
        .map(|bar| series.local_date(bar.timestamp).to_string())
        .collect();
    assert_eq!(dates, ["2024-01-01", "2023-12-01"]);
    // the same instants read as the previous day in UTC
    assert_eq!(series.bars()[0].timestamp.date_naive().to_string(), "2023-11-30");
}

#[tokio::test]
async fn symbol_with_query_syntax_never_reaches_the_server() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", Matcher::Any)
        .with_status(200)
        .with_body(CHART_OK)
        .expect(0)
        .create_async()
        .await;

    let err = provider(&server)
        .fetch_bars(&BarsRequest::new("AAPL?RANGE=MAX", IntervalClass::Daily))
        .await
        .unwrap_err();
    assert!(matches!(err, ProviderError::NotFound { .. }), "{err:?}");
    mock.assert_async().await;
}

#[tokio::test]
async fn unknown_symbol_is_not_found() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/v8/finance/chart/ZZZZINVALID")
        .match_query(Matcher::Any)
        .with_status(404)
        .with_body(CHART_NOT_FOUND)
        .create_async()
        .await;

    let err = load(&provider(&server), "ZZZZINVALID", IntervalClass::Daily)
        .await
        .unwrap_err();
    assert_eq!(err.reason(), LoadErrorReason::NotFound);
}

#[tokio::test]
async fn not_found_payload_with_ok_status_is_not_found() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/v8/finance/chart/DELISTED")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(CHART_NOT_FOUND)
        .create_async()
        .await;

    let result = provider(&server)
        .fetch_bars(&BarsRequest::new("DELISTED", IntervalClass::Monthly))
        .await;
    assert!(matches!(result, Err(ProviderError::NotFound { .. })));
}

#[tokio::test]
async fn server_errors_are_provider_errors_and_not_retried() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/v8/finance/chart/AAPL")
        .match_query(Matcher::Any)
        .with_status(503)
        .with_body("upstream unavailable")
        .expect(1)
        .create_async()
        .await;

    let err = load(&provider(&server), "AAPL", IntervalClass::Yearly)
        .await
        .unwrap_err();
    mock.assert_async().await;
    assert_eq!(err.reason(), LoadErrorReason::ProviderError);
    assert!(err.to_string().contains("AAPL"));
}

#[tokio::test]
async fn garbage_body_is_a_decode_error() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/v8/finance/chart/AAPL")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body("<html>captcha</html>")
        .create_async()
        .await;

    let result = provider(&server)
        .fetch_bars(&BarsRequest::new("AAPL", IntervalClass::Daily))
        .await;
    assert!(matches!(result, Err(ProviderError::Decode { .. })));
}

#[tokio::test]
async fn empty_range_is_empty_series() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/v8/finance/chart/NEWCO")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(r#"{"chart":{"result":[{"meta":{"symbol":"NEWCO"},"indicators":{"quote":[{}]}}],"error":null}}"#)
        .create_async()
        .await;

    let err = load(&provider(&server), "NEWCO", IntervalClass::Max)
        .await
        .unwrap_err();
    assert_eq!(err.reason(), LoadErrorReason::EmptySeries);
}

#[tokio::test]
async fn fetches_news_headlines() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/v1/finance/search")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("q".into(), "AAPL".into()),
            Matcher::UrlEncoded("newsCount".into(), "2".into()),
        ]))
        .with_status(200)
        .with_body(
            r#"{"news":[
                {"uuid":"1","title":"Apple ships new chip","publisher":"Reuters","link":"https://example.com/1","providerPublishTime":1714651200},
                {"uuid":"2","title":"Services revenue grows","publisher":"Bloomberg","link":"https://example.com/2"}
            ]}"#,
        )
        .create_async()
        .await;

    let items = provider(&server).fetch_news("AAPL", 2).await.unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].title, "Apple ships new chip");
    assert_eq!(
        items[0].published_at.map(|t| t.format("%Y-%m-%d").to_string()),
        Some("2024-05-02".to_string())
    );
    assert!(items[1].published_at.is_none());
}
