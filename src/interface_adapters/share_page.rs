// Share page served to the person whose location is requested.

const TOKEN_PLACEHOLDER: &str = "{{TOKEN}}";

const SHARE_PAGE_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>Share your location</title>
  <style>
    body { font-family: system-ui, sans-serif; max-width: 32rem; margin: 3rem auto; padding: 0 1rem; }
    button { font-size: 1.1rem; padding: 0.6rem 1.2rem; }
    #status { margin-top: 1rem; color: #444; }
  </style>
</head>
<body>
  <h1>Share your location</h1>
  <p>Someone sent you this link to see where you are. Your position is kept for 24 hours.</p>
  <button id="share">Share location</button>
  <p id="status"></p>
  <script>
    const token = "{{TOKEN}}";
    const statusLine = document.getElementById("status");

    function deviceInfo() {
      const ua = navigator.userAgent;
      const os = /Android/.test(ua) ? "Android"
        : /iPhone|iPad|iPod/.test(ua) ? "iOS"
        : /Windows/.test(ua) ? "Windows"
        : /Mac OS X/.test(ua) ? "macOS"
        : /Linux/.test(ua) ? "Linux" : "Unknown";
      const browser = /Edg\//.test(ua) ? "Edge"
        : /OPR\//.test(ua) ? "Opera"
        : /Chrome\//.test(ua) ? "Chrome"
        : /Firefox\//.test(ua) ? "Firefox"
        : /Safari\//.test(ua) ? "Safari" : "Unknown";
      return {
        device: /Mobi|Android|iPhone/.test(ua) ? "mobile" : "desktop",
        os: os,
        browser: browser,
        language: navigator.language || "",
        screen_size: screen.width + "x" + screen.height
      };
    }

    function send(position) {
      fetch("/location/" + token, {
        method: "POST",
        headers: { "Content-Type": "application/json" },
        body: JSON.stringify({
          latitude: position.coords.latitude,
          longitude: position.coords.longitude,
          accuracy: position.coords.accuracy,
          device_info: deviceInfo()
        })
      }).then(function (response) {
        statusLine.textContent = response.ok ? "Location shared. You can close this page." : "Could not share location.";
      }).catch(function () {
        statusLine.textContent = "Could not reach the server.";
      });
    }

    document.getElementById("share").addEventListener("click", function () {
      if (!navigator.geolocation) {
        statusLine.textContent = "This browser cannot report its location.";
        return;
      }
      statusLine.textContent = "Waiting for your position...";
      navigator.geolocation.getCurrentPosition(send, function (err) {
        statusLine.textContent = "Location unavailable: " + err.message;
      }, { enableHighAccuracy: true, timeout: 15000 });
    });
  </script>
</body>
</html>
"#;

// Callers must pass a well-formed token; it is embedded without escaping.
pub fn render_share_page(token: &str) -> String {
    SHARE_PAGE_TEMPLATE.replace(TOKEN_PLACEHOLDER, token)
}
