use trade_journal::models::{Direction, Trade};

/// Closed or open trade on "ES"; `created_at` is noon UTC on `date`.
pub fn make_trade(
    id: &str,
    direction: Direction,
    entry: f64,
    exit: Option<f64>,
    date: &str,
) -> Trade {
    Trade {
        id: id.to_string(),
        ticker: "ES".to_string(),
        entry,
        exit,
        direction,
        setup: None,
        notes: None,
        tags: None,
        date: date.to_string(),
        created_at: format!("{}T12:00:00Z", date),
        ai_feedback: None,
        user_id: None,
    }
}

/// Long from 100 with the given P&L.
pub fn pnl_trade(id: &str, pnl: f64, date: &str) -> Trade {
    make_trade(id, Direction::Long, 100.0, Some(100.0 + pnl), date)
}

/// A `GET /trades` style payload with one record of every awkward kind.
pub const API_PAYLOAD: &str = r#"[
  {"id":"1","ticker":"AAPL","entry":180.0,"exit":190.0,"direction":"long","setup":"breakout",
   "notes":null,"tags":["earnings"],"date":"2024-03-01","user_id":null,
   "created_at":"2024-03-01T15:00:00+00:00","ai_feedback":"Good patience on the entry."},
  {"id":"2","ticker":"TSLA","entry":200.0,"exit":210.0,"direction":"short","setup":"reversal",
   "notes":null,"tags":null,"date":"2024-03-20","user_id":null,
   "created_at":"2024-03-20T15:00:00+00:00","ai_feedback":null},
  {"id":"3","ticker":"MSFT","entry":400.0,"exit":null,"direction":"long","setup":null,
   "notes":"still running","tags":null,"date":"2024-04-02","user_id":null,
   "created_at":"2024-04-02T15:00:00+00:00","ai_feedback":null},
  {"id":"4","ticker":"NVDA","entry":0.0,"exit":5.0,"direction":"long","setup":"breakout",
   "notes":null,"tags":null,"date":"2024-04-05","user_id":null,
   "created_at":"2024-04-05T15:00:00+00:00","ai_feedback":null},
  {"id":"5","ticker":"AMD","entry":150.0,"exit":140.0,"direction":"sideways","setup":"breakout",
   "notes":null,"tags":null,"date":"2024-04-06","user_id":null,
   "created_at":"2024-04-06T15:00:00+00:00","ai_feedback":null},
  {"id":"6","ticker":"META","entry":500.0,"exit":500.0,"direction":"long","setup":"",
   "notes":null,"tags":null,"date":"2023-03-15","user_id":null,
   "created_at":"2023-03-15T15:00:00+00:00","ai_feedback":null}
]"#;
