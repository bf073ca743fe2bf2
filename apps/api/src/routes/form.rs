use axum::response::Html;

const UPLOAD_FORM: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>Resume Match</title>
</head>
<body>
  <h1>Resume Match</h1>
  <form action="/analyze" method="post" enctype="multipart/form-data">
    <p>
      <label for="job_description">Job description</label><br>
      <textarea id="job_description" name="job_description" rows="10" cols="80" required></textarea>
    </p>
    <p>
      <label for="resumes">Resumes (PDF)</label><br>
      <input id="resumes" type="file" name="resumes" accept="application/pdf" multiple required>
    </p>
    <button type="submit">Analyze</button>
  </form>
</body>
</html>
"#;

/// GET /
/// Plain HTML form that posts to `/analyze`.
pub async fn upload_form_handler() -> Html<&'static str> {
    Html(UPLOAD_FORM)
}
