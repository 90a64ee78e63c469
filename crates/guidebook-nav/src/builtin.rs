//! Navigation table of "Let's Build with Elixir and Phoenix".

/// Site name the built-in table was authored for.
pub const BUILTIN_SITE_NAME: &str = "Let's Build with Elixir and Phoenix";

/// Built-in chapter rows in reading order: `(id, title, previous, next)`.
#[rustfmt::skip]
pub(crate) const BUILTIN_CHAPTERS: &[(&str, &str, Option<&str>, Option<&str>)] = &[
    // Front matter
    ("00.00-front-matter", "Front Matter", None, Some("00.01-contents")),
    ("00.01-contents", "Contents", Some("00.00-front-matter"), Some("01.00-introduction")),

    // Chapter 1: Introduction
    ("01.00-introduction", "Introduction", Some("00.01-contents"), Some("01.01-prerequisites")),
    ("01.01-prerequisites", "Prerequisites", Some("01.00-introduction"), Some("02.00-foundations")),

    // Chapter 2: Foundations
    ("02.00-foundations", "Foundations", Some("01.01-prerequisites"), Some("02.01-project-setup")),
    ("02.01-project-setup", "Project Setup", Some("02.00-foundations"), Some("02.02-web-application-basics")),
    ("02.02-web-application-basics", "Web Application Basics", Some("02.01-project-setup"), Some("02.03-routing-requests")),
    ("02.03-routing-requests", "Routing Requests", Some("02.02-web-application-basics"), Some("02.04-customizing-http-headers")),
    ("02.04-customizing-http-headers", "Customizing HTTP Headers", Some("02.03-routing-requests"), Some("02.05-url-query-strings")),
    ("02.05-url-query-strings", "URL Query Strings", Some("02.04-customizing-http-headers"), Some("02.06-project-structure")),
    ("02.06-project-structure", "Project Structure", Some("02.05-url-query-strings"), Some("02.07-html-templating")),
    ("02.07-html-templating", "HTML Templating", Some("02.06-project-structure"), Some("02.08-serving-static-files")),
    ("02.08-serving-static-files", "Serving Static Files", Some("02.07-html-templating"), Some("02.09-the-controller-pattern")),
    ("02.09-the-controller-pattern", "The Controller Pattern", Some("02.08-serving-static-files"), Some("03.00-configuration-and-error-handling")),

    // Chapter 3: Configuration and Error Handling
    ("03.00-configuration-and-error-handling", "Configuration and Error Handling", Some("02.09-the-controller-pattern"), Some("03.01-managing-configuration")),
    ("03.01-managing-configuration", "Managing Configuration", Some("03.00-configuration-and-error-handling"), Some("03.02-environment-variables")),
    ("03.02-environment-variables", "Environment Variables", Some("03.01-managing-configuration"), Some("03.03-custom-error-responses")),
    ("03.03-custom-error-responses", "Custom Error Responses", Some("03.02-environment-variables"), Some("03.04-error-pages")),
    ("03.04-error-pages", "Error Pages", Some("03.03-custom-error-responses"), Some("03.05-logging")),
    ("03.05-logging", "Logging", Some("03.04-error-pages"), Some("04.00-database-driven-responses")),

    // Chapter 4: Database with Ecto
    ("04.00-database-driven-responses", "Database-Driven Responses", Some("03.05-logging"), Some("04.01-setting-up-postgresql")),
    ("04.01-setting-up-postgresql", "Setting Up PostgreSQL", Some("04.00-database-driven-responses"), Some("04.02-creating-database-migrations")),
    ("04.02-creating-database-migrations", "Database Migrations", Some("04.01-setting-up-postgresql"), Some("04.03-ecto-schemas")),
    ("04.03-ecto-schemas", "Ecto Schemas", Some("04.02-creating-database-migrations"), Some("04.04-changesets-and-validations")),
    ("04.04-changesets-and-validations", "Changesets and Validations", Some("04.03-ecto-schemas"), Some("04.05-crud-operations")),
    ("04.05-crud-operations", "CRUD Operations", Some("04.04-changesets-and-validations"), Some("04.06-ecto-queries")),
    ("04.06-ecto-queries", "Ecto Queries", Some("04.05-crud-operations"), Some("04.07-associations")),
    ("04.07-associations", "Associations", Some("04.06-ecto-queries"), Some("04.08-transactions")),
    ("04.08-transactions", "Transactions", Some("04.07-associations"), Some("04.09-database-best-practices")),
    ("04.09-database-best-practices", "Database Best Practices", Some("04.08-transactions"), Some("05.00-dynamic-templates")),

    // Chapter 5: Dynamic Templates
    ("05.00-dynamic-templates", "Dynamic Templates", Some("04.09-database-best-practices"), Some("05.01-displaying-data")),
    ("05.01-displaying-data", "Displaying Data", Some("05.00-dynamic-templates"), Some("05.02-template-actions")),
    ("05.02-template-actions", "Template Actions", Some("05.01-displaying-data"), Some("05.03-iterating-collections")),
    ("05.03-iterating-collections", "Iterating Collections", Some("05.02-template-actions"), Some("05.04-components")),
    ("05.04-components", "Components", Some("05.03-iterating-collections"), Some("05.05-layouts")),
    ("05.05-layouts", "Layouts", Some("05.04-components"), Some("05.06-helpers-and-formatting")),
    ("05.06-helpers-and-formatting", "Helpers and Formatting", Some("05.05-layouts"), Some("06.00-plugs-and-middleware")),

    // Chapter 6: Plugs and Middleware
    ("06.00-plugs-and-middleware", "Plugs and Middleware", Some("05.06-helpers-and-formatting"), Some("06.01-understanding-plugs")),
    ("06.01-understanding-plugs", "Understanding Plugs", Some("06.00-plugs-and-middleware"), Some("06.02-phoenix-pipelines")),
    ("06.02-phoenix-pipelines", "Phoenix Pipelines", Some("06.01-understanding-plugs"), Some("06.03-creating-custom-plugs")),
    ("06.03-creating-custom-plugs", "Creating Custom Plugs", Some("06.02-phoenix-pipelines"), Some("06.04-common-plug-patterns")),
    ("06.04-common-plug-patterns", "Common Plug Patterns", Some("06.03-creating-custom-plugs"), Some("06.05-testing-plugs")),
    ("06.05-testing-plugs", "Testing Plugs", Some("06.04-common-plug-patterns"), Some("07.00-advanced-routing")),

    // Chapter 7: Advanced Routing
    ("07.00-advanced-routing", "Advanced Routing", Some("06.05-testing-plugs"), Some("07.01-nested-resources")),
    ("07.01-nested-resources", "Nested Resources", Some("07.00-advanced-routing"), Some("07.02-scopes-and-namespaces")),
    ("07.02-scopes-and-namespaces", "Scopes and Namespaces", Some("07.01-nested-resources"), Some("07.03-custom-routes")),
    ("07.03-custom-routes", "Custom Routes", Some("07.02-scopes-and-namespaces"), Some("08.00-processing-forms")),

    // Chapter 8: Processing Forms
    ("08.00-processing-forms", "Processing Forms", Some("07.03-custom-routes"), Some("08.01-form-basics")),
    ("08.01-form-basics", "Form Basics", Some("08.00-processing-forms"), Some("08.02-phoenix-forms")),
    ("08.02-phoenix-forms", "Phoenix Forms", Some("08.01-form-basics"), Some("08.03-changesets-in-forms")),
    ("08.03-changesets-in-forms", "Changesets in Forms", Some("08.02-phoenix-forms"), Some("08.04-file-uploads")),
    ("08.04-file-uploads", "File Uploads", Some("08.03-changesets-in-forms"), Some("08.05-form-validation")),
    ("08.05-form-validation", "Form Validation", Some("08.04-file-uploads"), Some("08.06-form-security")),
    ("08.06-form-security", "Form Security", Some("08.05-form-validation"), Some("09.00-sessions-and-state")),

    // Chapter 9: Sessions and State
    ("09.00-sessions-and-state", "Sessions and State", Some("08.06-form-security"), Some("09.01-session-management")),
    ("09.01-session-management", "Session Management", Some("09.00-sessions-and-state"), Some("09.02-flash-messages")),
    ("09.02-flash-messages", "Flash Messages", Some("09.01-session-management"), Some("09.03-cookies")),
    ("09.03-cookies", "Cookies", Some("09.02-flash-messages"), Some("09.04-ets-and-caching")),
    ("09.04-ets-and-caching", "ETS and Caching", Some("09.03-cookies"), Some("10.00-security")),

    // Chapter 10: Security
    ("10.00-security", "Security", Some("09.04-ets-and-caching"), Some("10.01-https-and-tls")),
    ("10.01-https-and-tls", "HTTPS and TLS", Some("10.00-security"), Some("10.02-csrf-protection")),
    ("10.02-csrf-protection", "CSRF Protection", Some("10.01-https-and-tls"), Some("10.03-sql-injection")),
    ("10.03-sql-injection", "SQL Injection", Some("10.02-csrf-protection"), Some("10.04-xss-prevention")),
    ("10.04-xss-prevention", "XSS Prevention", Some("10.03-sql-injection"), Some("10.05-security-headers")),
    ("10.05-security-headers", "Security Headers", Some("10.04-xss-prevention"), Some("10.06-common-vulnerabilities")),
    ("10.06-common-vulnerabilities", "Common Vulnerabilities", Some("10.05-security-headers"), Some("11.00-authentication")),

    // Chapter 11: Authentication
    ("11.00-authentication", "Authentication", Some("10.06-common-vulnerabilities"), Some("11.01-password-hashing")),
    ("11.01-password-hashing", "Password Hashing", Some("11.00-authentication"), Some("11.02-user-registration")),
    ("11.02-user-registration", "User Registration", Some("11.01-password-hashing"), Some("11.03-login-logout")),
    ("11.03-login-logout", "Login and Logout", Some("11.02-user-registration"), Some("11.04-remember-me")),
    ("11.04-remember-me", "Remember Me", Some("11.03-login-logout"), Some("11.05-password-reset")),
    ("11.05-password-reset", "Password Reset", Some("11.04-remember-me"), Some("11.06-email-verification")),
    ("11.06-email-verification", "Email Verification", Some("11.05-password-reset"), Some("11.07-oauth")),
    ("11.07-oauth", "OAuth Integration", Some("11.06-email-verification"), Some("12.00-liveview")),

    // Chapter 12: LiveView
    ("12.00-liveview", "Phoenix LiveView", Some("11.07-oauth"), Some("12.01-liveview-basics")),
    ("12.01-liveview-basics", "LiveView Basics", Some("12.00-liveview"), Some("12.02-liveview-forms")),
    ("12.02-liveview-forms", "LiveView Forms", Some("12.01-liveview-basics"), Some("12.03-live-components")),
    ("12.03-live-components", "Live Components", Some("12.02-liveview-forms"), Some("12.04-real-time-features")),
    ("12.04-real-time-features", "Real-Time Features", Some("12.03-live-components"), Some("13.00-testing")),

    // Chapter 13: Testing
    ("13.00-testing", "Testing", Some("12.04-real-time-features"), Some("13.01-unit-testing")),
    ("13.01-unit-testing", "Unit Testing", Some("13.00-testing"), Some("13.02-controller-testing")),
    ("13.02-controller-testing", "Controller Testing", Some("13.01-unit-testing"), Some("13.03-integration-testing")),
    ("13.03-integration-testing", "Integration Testing", Some("13.02-controller-testing"), Some("13.04-liveview-testing")),
    ("13.04-liveview-testing", "LiveView Testing", Some("13.03-integration-testing"), Some("13.05-database-testing")),
    ("13.05-database-testing", "Database Testing", Some("13.04-liveview-testing"), Some("13.06-test-best-practices")),
    ("13.06-test-best-practices", "Test Best Practices", Some("13.05-database-testing"), Some("14.00-deployment")),

    // Chapter 14: Deployment
    ("14.00-deployment", "Deployment", Some("13.06-test-best-practices"), Some("14.01-releases")),
    ("14.01-releases", "Elixir Releases", Some("14.00-deployment"), Some("14.02-docker")),
    ("14.02-docker", "Docker Deployment", Some("14.01-releases"), Some("14.03-fly-io")),
    ("14.03-fly-io", "Fly.io Deployment", Some("14.02-docker"), Some("14.04-production-config")),
    ("14.04-production-config", "Production Config", Some("14.03-fly-io"), Some("14.05-monitoring")),
    ("14.05-monitoring", "Monitoring", Some("14.04-production-config"), Some("15.00-conclusion")),

    // Conclusion and Appendix
    ("15.00-conclusion", "Conclusion", Some("14.05-monitoring"), Some("16.00-further-reading")),
    ("16.00-further-reading", "Further Reading", Some("15.00-conclusion"), Some("17.00-guided-exercises")),

    // Chapter 17: Exercises
    ("17.00-guided-exercises", "Guided Exercises", Some("16.00-further-reading"), Some("17.01-foundations-exercises")),
    ("17.01-foundations-exercises", "Foundations Exercises", Some("17.00-guided-exercises"), Some("17.02-database-exercises")),
    ("17.02-database-exercises", "Database Exercises", Some("17.01-foundations-exercises"), Some("17.03-web-exercises")),
    ("17.03-web-exercises", "Web Layer Exercises", Some("17.02-database-exercises"), Some("17.04-auth-exercises")),
    ("17.04-auth-exercises", "Authentication Exercises", Some("17.03-web-exercises"), Some("17.05-liveview-exercises")),
    ("17.05-liveview-exercises", "LiveView Exercises", Some("17.04-auth-exercises"), Some("17.06-deployment-exercises")),
    ("17.06-deployment-exercises", "Deployment Exercises", Some("17.05-liveview-exercises"), None),
];
