//! Availability query service.

use tracing::info;

use crate::domain::{FareClass, QueryDate, TicketRecord};
use crate::stations::{StationDirectory, StationSource};

use super::client::{QueryParams, TicketSource};
use super::convert::{parse_query_body, select_tickets};
use super::error::QueryError;

/// Answers "which trains from A to B on this date still have seats".
///
/// Station names are resolved through the injected [`StationDirectory`]; the
/// query itself goes to a [`TicketSource`].
pub struct TicketQueryService<S, T> {
    directory: StationDirectory<S>,
    tickets: T,
}

impl<S: StationSource, T: TicketSource> TicketQueryService<S, T> {
    /// Create a query service.
    pub fn new(directory: StationDirectory<S>, tickets: T) -> Self {
        Self { directory, tickets }
    }

    /// The station directory used for name resolution.
    pub fn directory(&self) -> &StationDirectory<S> {
        &self.directory
    }

    /// Run one availability query.
    ///
    /// Returns the legs that board at `from_city` and have at least one real
    /// seat count, in the service's order. An empty outcome is reported as
    /// [`QueryError::NoService`] rather than an empty list.
    pub async fn query(
        &self,
        from_city: &str,
        to_city: &str,
        date: &QueryDate,
        fare: FareClass,
    ) -> Result<Vec<TicketRecord>, QueryError> {
        let from = self.directory.resolve(from_city).await?;
        let to = self.directory.resolve(to_city).await?;

        let params = QueryParams {
            from,
            to,
            date: *date,
            fare,
        };

        let body = self.tickets.fetch_tickets(&params).await?;
        let raw = parse_query_body(&body)?;
        let total = raw.len();

        let records = select_tickets(raw, from_city);
        info!(total, kept = records.len(), "availability query answered");

        if records.is_empty() {
            return Err(QueryError::NoService);
        }

        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{SeatCount, normalize_at};
    use crate::error::ErrorKind;
    use crate::stations::{StationCache, StationCacheConfig, StationError, parse_station_list};
    use chrono::NaiveDate;
    use std::sync::Mutex;
    use tempfile::{TempDir, tempdir};

    const STATIONS: &str =
        "@zha|珠海|ZHQ|zhuhai|zh|@tjw|唐家湾|PKQ|tangjiawan|tjw|@gzn|广州南|IZQ|guangzhounan|gzn|";

    struct NoStationSource;

    impl StationSource for NoStationSource {
        async fn fetch_station_list(&self) -> Result<String, StationError> {
            Err(StationError::EmptyList)
        }
    }

    /// Canned availability responses, recording what was asked.
    struct CannedTickets {
        body: String,
        seen: Mutex<Vec<QueryParams>>,
    }

    impl CannedTickets {
        fn new(body: &str) -> Self {
            Self {
                body: body.to_string(),
                seen: Mutex::new(Vec::new()),
            }
        }
    }

    impl TicketSource for &CannedTickets {
        async fn fetch_tickets(&self, params: &QueryParams) -> Result<String, QueryError> {
            self.seen.lock().unwrap().push(*params);
            Ok(self.body.clone())
        }
    }

    fn service<'a>(
        dir: &TempDir,
        tickets: &'a CannedTickets,
    ) -> TicketQueryService<NoStationSource, &'a CannedTickets> {
        let directory = StationDirectory::preloaded(
            NoStationSource,
            StationCache::new(StationCacheConfig::in_dir(dir.path())),
            parse_station_list(STATIONS),
        );
        TicketQueryService::new(directory, tickets)
    }

    fn date() -> QueryDate {
        normalize_at(Some("8-26"), NaiveDate::from_ymd_opt(2016, 8, 1).unwrap()).unwrap()
    }

    fn entry(train: &str, from: &str, zy: &str, ze: &str) -> String {
        format!(
            r#"{{"train_no":"{train}","start_station_name":"珠海","from_station_name":"{from}","to_station_name":"广州南","arrive_time":"09:48","zy_num":"{zy}","ze_num":"{ze}"}}"#
        )
    }

    fn body(entries: &[String]) -> String {
        format!(r#"{{"data":{{"datas":[{}]}}}}"#, entries.join(","))
    }

    #[tokio::test]
    async fn returns_only_legs_boarding_at_origin() {
        let dir = tempdir().unwrap();
        let tickets = CannedTickets::new(&body(&[
            entry("A", "唐家湾", "54", "257"),
            entry("B", "珠海", "62", "300"),
        ]));
        let service = service(&dir, &tickets);

        let records = service
            .query("唐家湾", "广州南", &date(), FareClass::Adult)
            .await
            .unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].train_no, "A");
        assert_eq!(records[0].first_class, SeatCount::Count(54));
    }

    #[tokio::test]
    async fn sends_resolved_codes() {
        let dir = tempdir().unwrap();
        let tickets = CannedTickets::new(&body(&[entry("A", "唐家湾", "1", "1")]));
        let service = service(&dir, &tickets);

        service
            .query("唐家湾", "广州南", &date(), FareClass::Discounted)
            .await
            .unwrap();

        let seen = tickets.seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].from.as_str(), "PKQ");
        assert_eq!(seen[0].to.as_str(), "IZQ");
        assert_eq!(seen[0].date.to_string(), "2016-08-26");
        assert_eq!(seen[0].fare, FareClass::Discounted);
    }

    #[tokio::test]
    async fn sold_out_leg_is_excluded() {
        let dir = tempdir().unwrap();
        let tickets = CannedTickets::new(&body(&[
            entry("A", "珠海", "无", "无"),
            entry("B", "珠海", "无", "33"),
        ]));
        let service = service(&dir, &tickets);

        let records = service
            .query("珠海", "广州南", &date(), FareClass::Adult)
            .await
            .unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].train_no, "B");
    }

    #[tokio::test]
    async fn empty_results_is_an_error() {
        let dir = tempdir().unwrap();
        let tickets = CannedTickets::new(r#"{"data":{"datas":[]}}"#);
        let service = service(&dir, &tickets);

        let err = service
            .query("珠海", "广州南", &date(), FareClass::Adult)
            .await
            .unwrap_err();

        assert!(matches!(err, QueryError::NoService));
        assert_eq!(err.kind(), ErrorKind::EmptyResult);
    }

    #[tokio::test]
    async fn everything_filtered_is_an_error() {
        let dir = tempdir().unwrap();
        let tickets = CannedTickets::new(&body(&[entry("A", "唐家湾", "5", "5")]));
        let service = service(&dir, &tickets);

        let err = service
            .query("珠海", "广州南", &date(), FareClass::Adult)
            .await
            .unwrap_err();

        assert!(matches!(err, QueryError::NoService));
    }

    #[tokio::test]
    async fn unknown_city_stops_before_querying() {
        let dir = tempdir().unwrap();
        let tickets = CannedTickets::new(&body(&[entry("A", "珠海", "5", "5")]));
        let service = service(&dir, &tickets);

        let err = service
            .query("珠海", "火星", &date(), FareClass::Adult)
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "specified station 火星 does not exist");
        assert_eq!(err.kind(), ErrorKind::UserInput);
        assert!(tickets.seen.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn failure_sentinel_is_no_service() {
        let dir = tempdir().unwrap();
        let tickets = CannedTickets::new("-1");
        let service = service(&dir, &tickets);

        let err = service
            .query("珠海", "广州南", &date(), FareClass::Adult)
            .await
            .unwrap_err();

        assert!(matches!(err, QueryError::NoService));
    }
}
