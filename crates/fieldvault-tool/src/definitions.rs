//! Static descriptor definitions for the built-in tools
//!
//! Each function returns the ordered descriptor sequence one tool advertises.
//! Nested shapes are assembled bottom-up from typed constructors.

use crate::descriptor::PropertyDescriptor;

/// Arguments for looking up a snippet by name
pub fn snippet_lookup_properties() -> Vec<PropertyDescriptor> {
    vec![PropertyDescriptor::string(
        "snippetname",
        "The name of the snippet.",
    )]
}

/// Arguments for saving a named snippet
pub fn snippet_save_properties() -> Vec<PropertyDescriptor> {
    vec![
        PropertyDescriptor::string("snippetname", "The name of the snippet."),
        PropertyDescriptor::string("snippet", "The content of the snippet."),
    ]
}

/// Flat arguments for a single sensor reading
pub fn simple_sensor_properties() -> Vec<PropertyDescriptor> {
    vec![
        PropertyDescriptor::string("sensor_id", "ID of the sensor"),
        PropertyDescriptor::string("metric_name", "Name of the metric"),
        PropertyDescriptor::number("value", "Value of the metric"),
        PropertyDescriptor::string("unit", "Unit of the metric"),
        PropertyDescriptor::datetime("timestamp", "Timestamp of the data"),
        PropertyDescriptor::boolean(
            "IsCalibrated",
            "If the device is calibrated manually (true) or automatically (false)",
        ),
    ]
}

/// Nested arguments for a full IoT device report
pub fn complex_sensor_properties() -> Vec<PropertyDescriptor> {
    vec![
        PropertyDescriptor::string("device_id", "Unique identifier of the device"),
        PropertyDescriptor::datetime("timestamp", "Timestamp of the device data"),
        PropertyDescriptor::object(
            "location",
            "Geographical and descriptive location of the device",
            location_properties(),
        ),
        PropertyDescriptor::array(
            "sensors",
            "List of sensors attached to the device",
            PropertyDescriptor::object("sensor", "Sensor information", sensor_properties()),
        ),
        PropertyDescriptor::array(
            "events",
            "List of events generated by the device",
            PropertyDescriptor::object("event", "Event information", event_properties()),
        ),
        PropertyDescriptor::object(
            "configuration",
            "Device configuration details",
            configuration_properties(),
        ),
    ]
}

fn location_properties() -> Vec<PropertyDescriptor> {
    vec![
        PropertyDescriptor::number("latitude", "Latitude of the device location"),
        PropertyDescriptor::number("longitude", "Longitude of the device location"),
        PropertyDescriptor::number("altitude", "Altitude of the device location"),
        PropertyDescriptor::string("description", "Description of the device location"),
    ]
}

fn metric_properties() -> Vec<PropertyDescriptor> {
    vec![
        PropertyDescriptor::string("name", "Name of the metric"),
        PropertyDescriptor::number("value", "Value of the metric"),
        PropertyDescriptor::string("unit", "Unit of the metric"),
        PropertyDescriptor::number("timestamp", "Timestamp of the metric data (epoch seconds)"),
        PropertyDescriptor::boolean("is_calibrated", "Whether the metric is calibrated"),
        PropertyDescriptor::string("quality", "Quality status of the metric"),
    ]
}

fn status_properties() -> Vec<PropertyDescriptor> {
    vec![
        PropertyDescriptor::number("battery_level", "Battery level percentage"),
        PropertyDescriptor::number("signal_strength", "Signal strength in dBm"),
        PropertyDescriptor::number(
            "last_maintenance",
            "Timestamp of last maintenance (epoch seconds)",
        ),
        PropertyDescriptor::array(
            "errors",
            "List of error codes or messages",
            PropertyDescriptor::string("error", "Error code or message"),
        ),
    ]
}

fn sensor_properties() -> Vec<PropertyDescriptor> {
    vec![
        PropertyDescriptor::string("sensor_id", "Unique identifier of the sensor"),
        PropertyDescriptor::string("type", "Type of the sensor (e.g., temperature, humidity)"),
        PropertyDescriptor::array(
            "metrics",
            "List of metrics measured by the sensor",
            PropertyDescriptor::object("metric", "Metric information", metric_properties()),
        ),
        PropertyDescriptor::object(
            "status",
            "Status information of the sensor",
            status_properties(),
        ),
    ]
}

fn event_properties() -> Vec<PropertyDescriptor> {
    vec![
        PropertyDescriptor::string("event_id", "Unique identifier of the event"),
        PropertyDescriptor::string("type", "Type of the event"),
        PropertyDescriptor::string("sensor_id", "ID of the sensor related to the event"),
        PropertyDescriptor::string("metric", "Metric involved in the event"),
        PropertyDescriptor::number("value", "Value that triggered the event"),
        PropertyDescriptor::number("threshold", "Threshold value for the event"),
        PropertyDescriptor::number("timestamp", "Timestamp of the event (epoch seconds)"),
        PropertyDescriptor::string("severity", "Severity level of the event"),
    ]
}

fn network_properties() -> Vec<PropertyDescriptor> {
    vec![
        PropertyDescriptor::string("type", "Type of network connection (e.g., wifi, ethernet)"),
        PropertyDescriptor::string("ssid", "SSID of the WiFi network"),
        PropertyDescriptor::string("ip", "IP address of the device"),
    ]
}

fn configuration_properties() -> Vec<PropertyDescriptor> {
    vec![
        PropertyDescriptor::number("sampling_interval_sec", "Sampling interval in seconds"),
        PropertyDescriptor::number(
            "transmit_interval_sec",
            "Data transmission interval in seconds",
        ),
        PropertyDescriptor::string("firmware_version", "Firmware version of the device"),
        PropertyDescriptor::object(
            "network",
            "Network configuration details",
            network_properties(),
        ),
    ]
}
