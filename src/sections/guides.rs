//! Read-only guide sections and the instruction texts other sections print.
//!
//! Texts use the markdown subset understood by [`ui::guide`].

use anyhow::Result;
use std::path::Path;

use super::{Flow, Session};
use crate::platform::Os;
use crate::state::SectionId;
use crate::ui;

pub const INTRODUCTION: &str = r#"
## What is Minikube?
Minikube is a local Kubernetes cluster that runs on your machine. Instead of using
Docker/Docker Compose for simple applications, Minikube provides a complete Kubernetes
experience with:

### Key Benefits:
  ✓ Run Kubernetes locally without needing a cloud account
  ✓ Perfect for learning and development
  ✓ Supports multiple container runtimes (Docker, containerd, CRI-O)
  ✓ Built-in add-ons for monitoring, ingress, and dashboards
  ✓ Cross-platform (macOS, Linux, Windows)

## When to Use Minikube vs Docker Compose:

### Use Docker Compose when:
  • Running simple multi-container applications
  • Quick local development
  • No need for orchestration or scaling

### Use Minikube when:
  • Learning Kubernetes
  • Testing Kubernetes configurations
  • Need load balancing, service discovery
  • Practice microservices architecture
  • Deploy multiple replicated services

## Kubernetes Components (explained simply):

  🔹 Pod: Smallest deployable unit (usually 1 container per pod)
  🔹 Service: Exposes pods internally or externally
  🔹 Deployment: Manages pod replicas
  🔹 ConfigMap: Store configuration data
  🔹 StatefulSet: For stateful applications (databases)
  🔹 Ingress: Route external traffic to services

## System Requirements:
  • 2 CPU cores minimum (4 recommended)
  • 4GB RAM minimum (8GB recommended)
  • 20GB free disk space
  • Docker, VirtualBox, KVM, or Hyper-V
"#;

pub const LOGGING: &str = r#"
## Kubernetes Logging Strategies:

### 1. Basic Pod Logs (Built-in):
```
# View logs from a pod
kubectl logs <pod-name>

# View logs from a deployment
kubectl logs deployment/<deployment-name>

# Stream logs (like tail -f)
kubectl logs -f pod/<pod-name>

# View logs from previous container (if crashed)
kubectl logs <pod-name> --previous

# Show timestamps
kubectl logs <pod-name> --timestamps=true
```

### 2. Structured Logging:
Create a sample deployment that writes JSON lines:
```
cat > logging-deployment.yaml << 'EOF'
apiVersion: apps/v1
kind: Deployment
metadata:
  name: logging-app
spec:
  replicas: 2
  selector:
    matchLabels:
      app: logging-app
  template:
    metadata:
      labels:
        app: logging-app
    spec:
      containers:
      - name: app
        image: python:3.9
        command: ["python", "-c"]
        args:
        - |
          import json
          import time
          from datetime import datetime

          while True:
            print(json.dumps({
              "timestamp": datetime.utcnow().isoformat(),
              "level": "INFO",
              "message": "Application running",
              "component": "app"
            }))
            time.sleep(2)
EOF

kubectl apply -f logging-deployment.yaml
```

### 3. View Logs in JSON Format:
```
kubectl logs deployment/logging-app -f | jq '.'
```

### 4. Multi-container Pod Logging:
```
# If pod has multiple containers
kubectl logs <pod-name> -c <container-name>

# Get logs from all containers
kubectl logs <pod-name> --all-containers=true
```

### 5. Event Logging:
```
# View cluster events
kubectl get events --sort-by=.metadata.creationTimestamp

# Watch events in real-time
kubectl get events -w
```

### 6. Logging Configuration via ConfigMap:
```
kubectl create configmap app-logs --from-literal=log_level=INFO --dry-run=client -o yaml | kubectl apply -f -
```
"#;

pub const TRACING: &str = r#"
## What is Distributed Tracing?
Distributed tracing helps you track requests across multiple services in your application.

### Popular Solutions:
  • Jaeger (OpenTelemetry)
  • Zipkin
  • DataDog
  • New Relic

### 1. Install Jaeger in Minikube:
```
kubectl create namespace observability
kubectl create -f https://github.com/jaegertracing/jaeger-kubernetes/raw/master/jaeger-all-in-one-template.yml -n observability
```

### 2. Access Jaeger UI:
```
# Port forward to local machine
kubectl port-forward -n observability svc/jaeger-query 16686:16686

# Visit: http://localhost:16686
```

### 3. Sample App with OpenTelemetry (Python):
```
cat > traced-app.yaml << 'EOF'
apiVersion: v1
kind: Service
metadata:
  name: traced-app
spec:
  selector:
    app: traced-app
  ports:
  - port: 8000
    targetPort: 8000
---
apiVersion: apps/v1
kind: Deployment
metadata:
  name: traced-app
spec:
  replicas: 1
  selector:
    matchLabels:
      app: traced-app
  template:
    metadata:
      labels:
        app: traced-app
    spec:
      containers:
      - name: app
        image: python:3.9
        env:
        - name: OTEL_EXPORTER_OTLP_ENDPOINT
          value: "http://jaeger-collector:4317"
        - name: OTEL_SERVICE_NAME
          value: "traced-app"
EOF

kubectl apply -f traced-app.yaml
```

### 4. View Traces in Jaeger:
Open http://localhost:16686 and search for "traced-app" service

### 5. Correlate Traces with Logs:
```
kubectl logs -l app=traced-app | grep "trace_id"
```
"#;

pub const ADDONS: &str = r#"
## Available Add-ons:
  1. 🖥️  Dashboard - Web UI for cluster management
  2. 🔗 Tunnel - LoadBalancer service support
  3. 📦 Registry - Local container image registry
  4. 📈 Metrics Server - Resource monitoring
  5. 🔌 Ingress Controller - HTTP/HTTPS routing

### Quick Start:
```
minikube addons list
minikube addons enable dashboard
minikube addons enable metrics-server
minikube addons enable registry
minikube addons enable ingress
```

### Dashboard:
  • Web-based cluster visualization
  • Pod and deployment management
  • Access: minikube dashboard

### Tunnel:
  • External IPs for LoadBalancer services
  • Access: minikube tunnel (separate terminal)

### Registry:
  • Push images without Docker Hub
  • Available at: localhost:5000

### Metrics Server:
  • CPU/Memory monitoring and HPA support
  • Commands: kubectl top nodes / kubectl top pods
"#;

pub const HELM: &str = r#"
## Production-Ready Helm Packages:

### Monitoring:
  • Prometheus - Metrics collection and storage
  • Grafana - Visualization and dashboards
  • Thanos - Long-term metrics storage

### Logging:
  • Loki - Log aggregation
  • Elasticsearch - Log storage and analysis
  • Kibana - Log visualization

### Tracing:
  • Jaeger - Distributed tracing
  • OpenTelemetry Collector - Unified telemetry

### Databases:
  • PostgreSQL, MongoDB, Redis
  • RabbitMQ, Kafka, MinIO

### Infrastructure:
  • Nginx Ingress, Cert-Manager, Sealed Secrets
  • ArgoCD, Vault

### Quick Start:
```
helm repo add bitnami https://charts.bitnami.com/bitnami
helm repo update
helm install my-redis bitnami/redis --namespace databases --create-namespace
helm list -A
```

### Installation Times:
  • Single package: ~5 minutes
  • Full stack: ~15 minutes
"#;

pub const KVM: &str = r#"
## Why KVM?
KVM (Kernel Virtual Machine) is faster and more efficient than Docker as a Minikube driver.

## Installation Steps:

### 1️⃣  Check if KVM is supported:
```
grep -cw vmx /proc/cpuinfo    # For Intel
grep -cw svm /proc/cpuinfo    # For AMD
```
(Output should be > 0)

### 2️⃣  Install KVM packages:
```
sudo apt-get update
sudo apt-get install -y qemu-kvm libvirt-daemon-system libvirt-clients
sudo apt-get install -y virt-manager docker.io
```

### 3️⃣  Add your user to libvirt group:
```
sudo usermod -a -G libvirt $USER
newgrp libvirt
```

### 4️⃣  Install Minikube:
```
curl -LO https://github.com/kubernetes/minikube/releases/latest/download/minikube-linux-amd64
sudo install minikube-linux-amd64 /usr/local/bin/minikube
```

### 5️⃣  Start Minikube with KVM driver:
```
minikube start --driver=kvm2 --cpus=4 --memory=8192
```

### 6️⃣  Verify KVM is working:
```
minikube config view
virsh list
```
"#;

pub const INSTALL_SUMMARY: &str = r#"
## ✓ Installation Complete!

### Next Steps:
1. Verify everything is working: minikube status
2. Deploy an app: kubectl create deployment hello --image=nginx
3. Access dashboard: minikube dashboard
4. Or continue with the tutorial!

### Useful Commands:
```
minikube start         # Start cluster
minikube stop          # Stop cluster
minikube delete        # Delete cluster
kubectl get pods       # List pods
minikube dashboard     # Open dashboard
```
"#;

pub const FAREWELL: &str = r#"
## Thank you for using Minikube Tutorial!

### Quick Reference Commands:
```
minikube start              # Start cluster
minikube stop               # Stop cluster
minikube delete             # Delete cluster
kubectl get nodes           # List nodes
kubectl get pods -A         # List all pods
kubectl apply -f <file>     # Deploy application
kubectl delete -f <file>    # Remove application
minikube dashboard          # Open dashboard
minikube logs               # View Minikube logs
```
"#;

// ============================================================================
// Per-OS installation instructions
// ============================================================================

pub fn docker_instructions(os: Os) -> &'static str {
    match os {
        Os::MacOs => {
            r#"
### macOS - Docker Desktop:
1. Download from: https://www.docker.com/products/docker-desktop
2. Double-click the .dmg file
3. Drag Docker.app to Applications folder
4. Launch Docker from Applications
5. Allow privileged helper installation when prompted
6. Verify: docker --version
"#
        }
        Os::Linux => {
            r#"
### Linux - Docker Installation:
```
curl -fsSL https://get.docker.com -o get-docker.sh
sudo sh get-docker.sh
sudo usermod -aG docker $USER
newgrp docker
```
Verify: docker --version
"#
        }
        Os::Windows | Os::Unknown => {
            r#"
### Windows - Docker Desktop:
1. Download from: https://www.docker.com/products/docker-desktop
2. Run the installer
3. Enable WSL 2 backend when prompted
4. Restart your computer
5. Verify: docker --version
"#
        }
    }
}

pub fn minikube_instructions(os: Os) -> &'static str {
    match os {
        Os::MacOs => {
            r#"
### macOS - Minikube Installation:

Option 1: Using Homebrew (recommended):
```
brew install minikube
```

Option 2: Direct download:
```
curl -LO https://github.com/kubernetes/minikube/releases/latest/download/minikube-darwin-amd64
sudo install minikube-darwin-amd64 /usr/local/bin/minikube
```

Verify: minikube version
"#
        }
        Os::Linux => {
            r#"
### Linux - Minikube Installation:

For Intel/AMD x86_64:
```
curl -LO https://github.com/kubernetes/minikube/releases/latest/download/minikube-linux-amd64
sudo install minikube-linux-amd64 /usr/local/bin/minikube
```

For ARM64:
```
curl -LO https://github.com/kubernetes/minikube/releases/latest/download/minikube-linux-arm64
sudo install minikube-linux-arm64 /usr/local/bin/minikube
```

Verify: minikube version
"#
        }
        Os::Windows | Os::Unknown => {
            r#"
### Windows - Minikube Installation:

Option 1: Using Chocolatey:
```
choco install minikube
```

Option 2: Direct download:
Download from: https://github.com/kubernetes/minikube/releases
Add to PATH

Verify: minikube version
"#
        }
    }
}

pub fn kubectl_instructions(os: Os) -> &'static str {
    match os {
        Os::MacOs => {
            r#"
### macOS - kubectl Installation:

Option 1: Using Homebrew (recommended):
```
brew install kubectl
```

Option 2: Direct download:
```
curl -LO "https://dl.k8s.io/release/$(curl -L -s https://dl.k8s.io/release/stable.txt)/bin/darwin/amd64/kubectl"
sudo install -o root -g root -m 0755 kubectl /usr/local/bin/kubectl
```

Verify: kubectl version --client
"#
        }
        Os::Linux => {
            r#"
### Linux - kubectl Installation:

For Intel/AMD x86_64:
```
curl -LO "https://dl.k8s.io/release/$(curl -L -s https://dl.k8s.io/release/stable.txt)/bin/linux/amd64/kubectl"
sudo install -o root -g root -m 0755 kubectl /usr/local/bin/kubectl
```

For ARM64:
```
curl -LO "https://dl.k8s.io/release/$(curl -L -s https://dl.k8s.io/release/stable.txt)/bin/linux/arm64/kubectl"
sudo install -o root -g root -m 0755 kubectl /usr/local/bin/kubectl
```

Verify: kubectl version --client
"#
        }
        Os::Windows | Os::Unknown => {
            r#"
### Windows - kubectl Installation:

Option 1: Using Chocolatey:
```
choco install kubernetes-cli
```

Option 2: Download from:
https://kubernetes.io/docs/tasks/tools/

Add to PATH
Verify: kubectl version --client
"#
        }
    }
}

/// Minikube plus kubectl in one go, for the quick setup section
pub fn quick_install_instructions(os: Os) -> &'static str {
    match os {
        Os::MacOs => {
            r#"
### macOS - Install via Homebrew (Recommended):
```
brew install minikube
brew install kubectl

minikube version
kubectl version --client
```

Or download manually:
  1. Visit: https://minikube.sigs.k8s.io/docs/start/
  2. Download the macOS binary
  3. Move to /usr/local/bin: sudo mv minikube /usr/local/bin/
  4. Verify: minikube version
"#
        }
        Os::Linux => {
            r#"
### Linux - Install with curl:
```
curl -LO https://github.com/kubernetes/minikube/releases/latest/download/minikube-linux-amd64
sudo install minikube-linux-amd64 /usr/local/bin/minikube

curl -LO "https://dl.k8s.io/release/$(curl -L -s https://dl.k8s.io/release/stable.txt)/bin/linux/amd64/kubectl"
sudo install -o root -g root -m 0755 kubectl /usr/local/bin/kubectl

minikube version
kubectl version --client
```

### Choose a driver:
  • Docker (recommended if Docker is installed): minikube start --driver=docker
  • KVM2 (faster, requires libvirt): minikube start --driver=kvm2
  • QEMU (no special setup needed): minikube start --driver=qemu
"#
        }
        Os::Windows | Os::Unknown => {
            r#"
### Windows - Install Minikube:

Option 1: Using Chocolatey (Recommended):
```
choco install minikube kubectl
```

Option 2: Using Windows Package Manager:
```
winget install Kubernetes.minikube
winget install Kubernetes.kubectl
```

Option 3: Download manually from https://minikube.sigs.k8s.io/docs/start/
and add it to PATH.

### Requirements:
  • Docker Desktop for Windows OR
  • Hyper-V (built into Windows Pro/Enterprise)
  • WSL 2 (recommended)
"#
        }
    }
}

// ============================================================================
// Sections
// ============================================================================

pub fn introduction(session: &mut Session<'_>) -> Result<Flow> {
    ui::section_header("Introduction to Minikube", "📖");
    ui::guide(INTRODUCTION);
    Ok(Flow::Completed(SectionId::Introduction))
}

pub fn logging(session: &mut Session<'_>) -> Result<Flow> {
    ui::section_header("Setup Logging", "📊");
    ui::guide(LOGGING);
    Ok(Flow::Completed(SectionId::Logging))
}

pub fn tracing(session: &mut Session<'_>) -> Result<Flow> {
    ui::section_header("Setup Distributed Tracing", "🔍");
    ui::guide(TRACING);
    Ok(Flow::Completed(SectionId::Tracing))
}

pub fn addons(session: &mut Session<'_>) -> Result<Flow> {
    ui::section_header("Minikube Add-ons Management", "🎛️");
    ui::guide(ADDONS);
    session.pause()?;
    Ok(Flow::Done)
}

pub fn helm(session: &mut Session<'_>) -> Result<Flow> {
    ui::section_header("Helm Packages Installation", "📦");
    ui::guide(HELM);
    session.pause()?;
    Ok(Flow::Done)
}

/// Goodbye screen. Always ends the program.
pub fn farewell(log_dir: &Path) -> Flow {
    ui::guide(FAREWELL);
    ui::section("Logs saved to:");
    ui::dim(&log_dir.display().to_string());
    println!("\nHappy learning! 🚀\n");
    log::info!("Tutorial ended");
    Flow::Quit
}
