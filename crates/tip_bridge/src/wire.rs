use serde::Deserialize;
use serde_json::Value;
use tip_core::{Color, Frame, JobId, Msg, Point, Triangle};
use tip_logging::tip_warn;

use crate::WireError;

/// One emitted backend event: `{"event": "<name>", "args": [...]}`.
#[derive(Debug, Deserialize)]
struct WireEvent {
    event: String,
    #[serde(default)]
    args: Vec<Value>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct WireFrame {
    width: f64,
    height: f64,
    /// A backend with no triangles yet may send `null`.
    #[serde(default)]
    data: Option<Vec<Value>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct WireTriangleData {
    triangle: WireTriangle,
    color: WireColor,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct WireTriangle {
    points: Vec<WirePoint>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct WirePoint {
    x: f64,
    y: f64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct WireColor {
    r: f64,
    g: f64,
    b: f64,
}

/// Decodes one line from the backend into a message.
pub fn decode_event(line: &str) -> Result<Msg, WireError> {
    let wire: WireEvent = serde_json::from_str(line)?;
    let args = Args {
        event: &wire.event,
        values: &wire.args,
    };

    let msg = match args.event {
        "newPath" => Msg::Created {
            display_name: args.string(0)?,
            job_id: args.job_id(1)?,
        },
        "working" => Msg::Working {
            job_id: args.job_id(0)?,
        },
        "done" => Msg::Done {
            job_id: args.job_id(0)?,
        },
        "error" => Msg::Error {
            job_id: args.job_id(0)?,
        },
        "time" => Msg::Tick {
            job_id: args.job_id(0)?,
            seconds: args.seconds(1)?,
        },
        "remove" => Msg::Removed {
            job_id: args.job_id(0)?,
        },
        "render" => Msg::FrameReceived(decode_frame(args.get(0)?.clone())?),
        "running" => Msg::BatchStarted,
        "stopped" => Msg::BatchStopped,
        other => return Err(WireError::UnknownEvent(other.to_string())),
    };
    Ok(msg)
}

/// Decodes a render payload. Triangle entries that are missing fields or do
/// not have exactly three points are dropped; the rest of the frame survives.
pub fn decode_frame(value: Value) -> Result<Frame, WireError> {
    let wire: WireFrame = serde_json::from_value(value)?;
    let data = wire.data.unwrap_or_default();
    let total = data.len();
    let mut frame = Frame::new(wire.width, wire.height);
    for entry in data {
        let Ok(data) = serde_json::from_value::<WireTriangleData>(entry) else {
            continue;
        };
        let [a, b, c] = match <[WirePoint; 3]>::try_from(data.triangle.points) {
            Ok(points) => points,
            Err(_) => continue,
        };
        frame = frame.with_triangle(
            Triangle::new(
                Point::new(a.x, a.y),
                Point::new(b.x, b.y),
                Point::new(c.x, c.y),
            ),
            Color::new(data.color.r, data.color.g, data.color.b),
        );
    }

    let skipped = total - frame.triangles.len();
    if skipped > 0 {
        tip_warn!("Skipped {} malformed triangles of {}", skipped, total);
    }
    Ok(frame)
}

struct Args<'a> {
    event: &'a str,
    values: &'a [Value],
}

impl Args<'_> {
    fn get(&self, index: usize) -> Result<&Value, WireError> {
        self.values.get(index).ok_or_else(|| WireError::MissingArg {
            event: self.event.to_string(),
            index,
        })
    }

    fn invalid(&self, index: usize, expected: &'static str) -> WireError {
        WireError::InvalidArg {
            event: self.event.to_string(),
            index,
            expected,
        }
    }

    fn string(&self, index: usize) -> Result<String, WireError> {
        self.get(index)?
            .as_str()
            .map(ToOwned::to_owned)
            .ok_or_else(|| self.invalid(index, "a string"))
    }

    /// Ids arrive as integers from some backends and strings from others.
    /// The form is kept so commands can echo it back.
    fn job_id(&self, index: usize) -> Result<JobId, WireError> {
        match self.get(index)? {
            Value::String(id) => Ok(JobId::new(id.as_str())),
            Value::Number(n) => Ok(n
                .as_u64()
                .map_or_else(|| JobId::new(n.to_string()), JobId::from)),
            _ => Err(self.invalid(index, "a job id")),
        }
    }

    /// Elapsed seconds, truncated to whole seconds. Negative values clamp to 0.
    fn seconds(&self, index: usize) -> Result<u64, WireError> {
        let seconds = self
            .get(index)?
            .as_f64()
            .filter(|s| s.is_finite())
            .ok_or_else(|| self.invalid(index, "a number of seconds"))?;
        Ok(seconds.max(0.0).trunc() as u64)
    }
}
