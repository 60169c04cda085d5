//! Static configuration form shown by the platform when an instructor sets up an activity.

use crate::mission::classification::{DEFAULT_CLASSIFICATION_ROBOT, DEFAULT_TARGET_OBJECTS};
use crate::mission::navigation::DEFAULT_MAX_EXECUTION_SECS;

pub const DEFAULT_PROGRAMMING_LANGUAGE: &str = "Python (RobotAPI 3.1)";

/// Render the form. Input names match the `/json_params` listing.
pub fn render() -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <title>Configuration - FRS</title>
    <meta charset="utf-8" />
</head>
<body>
    <h1>Robotic Mission Configuration (FRS)</h1>
    <form>
        <label>Robot type (robot_type):</label><br/>
        <input type="text" name="robot_type" value="{robot}" /><br/><br/>

        <label>Number of target objects (target_objects):</label><br/>
        <input type="number" name="target_objects" value="{objects}" /><br/><br/>

        <label>Sorting criteria (sorting_criteria):</label><br/>
        <input type="text" name="sorting_criteria" value="color,size" /><br/><br/>

        <label>Maximum execution time (max_execution_time_s):</label><br/>
        <input type="number" name="max_execution_time_s" value="{seconds}" /><br/><br/>

        <label>Programming language (programming_language):</label><br/>
        <input type="text" name="programming_language" value="{language}" /><br/><br/>
    </form>
</body>
</html>
"#,
        robot = DEFAULT_CLASSIFICATION_ROBOT,
        objects = DEFAULT_TARGET_OBJECTS,
        seconds = DEFAULT_MAX_EXECUTION_SECS,
        language = DEFAULT_PROGRAMMING_LANGUAGE,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::configurable_params;

    #[test]
    fn form_has_an_input_per_param() {
        let html = render();
        for param in configurable_params() {
            assert!(
                html.contains(&format!("name=\"{}\"", param.name)),
                "missing input for {}",
                param.name
            );
        }
    }
}
