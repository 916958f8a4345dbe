//! Sample application manifest.
//!
//! Renders the Service + Deployment pair used by the "Deploy sample
//! application" section.

use anyhow::{Context, Result, bail};
use std::fs;
use std::path::Path;

/// Longest name Kubernetes accepts for a Service
const MAX_NAME_LEN: usize = 63;

/// Check `name` is a valid DNS-1123 label
pub fn validate_app_name(name: &str) -> Result<()> {
    if name.is_empty() {
        bail!("Application name cannot be empty");
    }
    if name.len() > MAX_NAME_LEN {
        bail!("Application name must be at most {MAX_NAME_LEN} characters");
    }
    let valid_chars = name
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-');
    if !valid_chars || name.starts_with('-') || name.ends_with('-') {
        bail!(
            "Invalid application name '{name}': use lowercase letters, digits and '-', \
             starting and ending with a letter or digit"
        );
    }
    Ok(())
}

/// Render the manifest for `app` with `replicas` pods
pub fn sample_deployment(app: &str, replicas: u32) -> String {
    format!(
        r#"apiVersion: v1
kind: Service
metadata:
  name: {app}
  labels:
    app: {app}
spec:
  type: LoadBalancer
  ports:
    - port: 80
      targetPort: 8080
      protocol: TCP
  selector:
    app: {app}
---
apiVersion: apps/v1
kind: Deployment
metadata:
  name: {app}
  labels:
    app: {app}
spec:
  replicas: {replicas}
  selector:
    matchLabels:
      app: {app}
  template:
    metadata:
      labels:
        app: {app}
    spec:
      containers:
        - name: {app}
          image: nginx:latest
          ports:
            - containerPort: 80
          resources:
            requests:
              memory: "64Mi"
              cpu: "100m"
            limits:
              memory: "128Mi"
              cpu: "200m"
          livenessProbe:
            httpGet:
              path: /
              port: 80
            initialDelaySeconds: 10
            periodSeconds: 10
          readinessProbe:
            httpGet:
              path: /
              port: 80
            initialDelaySeconds: 5
            periodSeconds: 5
"#
    )
}

/// Write a rendered manifest to `path`
pub fn write(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content)
        .with_context(|| format!("Failed to write manifest: {}", path.display()))?;
    log::info!("Created deployment file: {}", path.display());
    Ok(())
}

/// How to reach the sample application once it is running
pub fn access_instructions(app: &str) -> String {
    format!(
        "### Access your application:\n\
         ```\n\
         # Forward port locally\n\
         kubectl port-forward svc/{app} 8080:80\n\
         \n\
         # Then visit: http://localhost:8080\n\
         \n\
         # Or use Minikube service\n\
         minikube service {app}\n\
         ```\n\
         ### View logs:\n\
         ```\n\
         kubectl logs -f deployment/{app}\n\
         ```\n\
         ### Update replicas:\n\
         ```\n\
         kubectl scale deployment {app} --replicas=5\n\
         ```\n\
         ### Delete deployment:\n\
         ```\n\
         kubectl delete deployment {app}\n\
         ```\n"
    )
}
